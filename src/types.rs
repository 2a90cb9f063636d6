/// One bookable class occurrence in the weekly schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassSession {
    pub id: i64,
    pub name: String,
    pub trainer: Option<String>,
    pub weekday: String,
    /// Local start time, `HH:MM`.
    pub start: String,
    pub duration_min: Option<u32>,
    pub level: Option<String>,
    pub spots_left: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trainer {
    pub id: i64,
    pub name: String,
    pub specialty: Option<String>,
    pub bio: Option<String>,
    pub photo: Option<String>,
}

/// Billing cadence of a membership plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingPeriod {
    Week,
    Month,
    Year,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MembershipPlan {
    pub id: i64,
    pub name: String,
    /// Price in cents; the wire format sends a decimal string.
    pub price_cents: u64,
    pub period: BillingPeriod,
    pub features: Vec<String>,
}

/// Contact-form submission sent to the club.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl Lead {
    /// Creates a lead with the two required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            message: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Acknowledgement returned for a submitted lead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadReceipt {
    pub received: bool,
    pub ticket_id: Option<String>,
}
