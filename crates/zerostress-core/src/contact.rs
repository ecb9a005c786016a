//! Dealer phone and SMS affordances.

/// Phone number shown in the header and dialed by the call buttons.
pub const DEFAULT_DEALER_PHONE: &str = "(555) 123-4567";

/// SMS-capable number used by the "Text Us" buttons.
pub const DEFAULT_DEALER_SMS: &str = "5551234567";

/// The two contact numbers behind the call and text links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerContact {
    /// Display and dial string.
    pub phone: String,
    /// SMS target.
    pub sms: String,
}

impl Default for DealerContact {
    fn default() -> Self {
        Self {
            phone: DEFAULT_DEALER_PHONE.to_owned(),
            sms: DEFAULT_DEALER_SMS.to_owned(),
        }
    }
}

impl DealerContact {
    /// `tel:` link target. The number is used exactly as configured.
    #[must_use]
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }

    /// `sms:` link target.
    #[must_use]
    pub fn sms_href(&self) -> String {
        format!("sms:{}", self.sms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_links() {
        let contact = DealerContact::default();
        assert_eq!(contact.tel_href(), "tel:(555) 123-4567");
        assert_eq!(contact.sms_href(), "sms:5551234567");
    }

    #[test]
    fn custom_numbers_pass_through() {
        let contact = DealerContact {
            phone: "+1-312-555-0100".to_owned(),
            sms: "3125550100".to_owned(),
        };
        assert_eq!(contact.tel_href(), "tel:+1-312-555-0100");
        assert_eq!(contact.sms_href(), "sms:3125550100");
    }
}
