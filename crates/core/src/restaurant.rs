//! Fixed details of the restaurant, shared by time validation and the
//! customer email templates.

pub const NAME: &str = "Ahlam Indian Restaurant";

/// Sender display name for outgoing email.
pub const SENDER_NAME: &str = "Ahlam Restaurant";

pub const ADDRESS: &str = "217 Streatham High Rd, London SW16 6EG";

pub const PHONE: &str = "+44 20 3011 3039";

/// First bookable hour (24h clock). Service runs until midnight.
pub const OPENING_HOUR: u32 = 12;

/// Currency symbol every menu price is prefixed with.
pub const CURRENCY_SYMBOL: &str = "£";
