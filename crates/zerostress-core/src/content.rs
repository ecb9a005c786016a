//! Static page content for the landing and campaign views.
//!
//! Every section of the campaign page renders from one of the ordered
//! `'static` slices below by direct iteration. Nothing here is computed.

/// Icon drawn next to a benefit or check-list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Clock,
    Wrench,
    Sparkles,
    Shield,
    Home,
    Check,
}

/// One entry of the value stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    /// Icon shown above the title.
    pub icon: Icon,
    /// Heading of the card.
    pub title: &'static str,
    /// Body text under the heading.
    pub description: &'static str,
}

/// One "How It Works" step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Two-digit label in the step badge (e.g. `01`).
    pub number: &'static str,
    /// Heading of the card.
    pub title: &'static str,
    /// Body text under the heading.
    pub description: &'static str,
    /// Fine print under the description.
    pub note: Option<&'static str>,
}

/// A customer quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    /// Star rating out of five.
    pub rating: u8,
    /// Quoted text, without surrounding quote marks.
    pub quote: &'static str,
    /// Name and town of the customer.
    pub author: &'static str,
}

/// A question/answer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    /// Summary line of the entry.
    pub question: &'static str,
    /// Text revealed when the entry is expanded.
    pub answer: &'static str,
}

/// One block of the compliance footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure {
    /// Bold lead-in of the block.
    pub heading: &'static str,
    /// Disclosure text.
    pub body: &'static str,
}

// ── Landing ──────────────────────────────────────────────────────────

/// Landing page heading.
pub const LANDING_TITLE: &str = "Nissan Dealership Hub";
/// Line under the landing heading.
pub const LANDING_SUBTITLE: &str = "Choose your experience";
/// Label of the link to the campaign page.
pub const LANDING_CTA: &str = "Zero-Stress Nissan Bundle";
/// Fine print under the landing button.
pub const LANDING_TAGLINE: &str = "0% APR + 60-Minute Sign-and-Drive + 25 bundles only";

// ── Campaign hero ────────────────────────────────────────────────────

/// Name in the campaign header.
pub const DEALER_NAME: &str = "Nissan Dealer";
/// Hero heading, before the bundle count.
pub const HERO_HEADLINE: &str = "Skip the hassle. Drive in 60 minutes.";
/// Offer summary under the hero heading.
pub const HERO_SUBHEAD: &str = "0% APR for up to 60 months on select new Nissan models + 1-Year Maintenance + No-Regret 7-Day/300-Mile Exchange.";
/// Label of every generic reserve button.
pub const HERO_PRIMARY_CTA: &str = "Reserve Your VIN";
/// Label of the hero's outline button.
pub const HERO_SECONDARY_CTA: &str = "Book 60-Minute Sign-and-Drive";
/// Hero image file name under `/assets`.
pub const HERO_IMAGE: &str = "hero-delivery.svg";
/// Alt text of the hero image.
pub const HERO_IMAGE_ALT: &str =
    "Happy customers receiving keys to their new Nissan at the dealership";

/// Check list under the hero CTAs.
pub const HERO_CHECKLIST: &[&str] = &[
    "60-Minute Sign-and-Drive",
    "1-Year Maintenance",
    "VIP Loaner Access",
    "Home Delivery + DMV",
    "Lifetime Car Washes",
    "7-Day/300-Mile Exchange",
];

/// Note under the vehicle grid.
pub const INVENTORY_FOOTNOTE: &str =
    "VIN list updates in real time. When they're gone, they're gone.";

// ── Sections ─────────────────────────────────────────────────────────

pub const STEPS_HEADING: &str = "How It Works";
pub const STEPS_SUBHEADING: &str = "Three simple steps to your new Nissan";

/// The three "How It Works" steps, in order.
pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Reserve your VIN",
        description: "We confirm by text/call",
        note: None,
    },
    Step {
        number: "02",
        title: "60-Minute Sign-and-Drive",
        description: "We prep paperwork; you sign and go",
        note: Some("Clock starts at check-in when VIN selected; stops at signed buyer's order"),
    },
    Step {
        number: "03",
        title: "Enjoy zero-stress ownership",
        description: "Maintenance, washes, VIP loaner, DMV handled",
        note: None,
    },
];

pub const BENEFITS_HEADING: &str = "6 Benefits Included at No Additional Charge";
pub const BENEFITS_SUBHEADING: &str = "Everything you need for zero-stress ownership";

/// The six included benefits, in display order.
pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: Icon::Clock,
        title: "60-Minute Sign-and-Drive Guarantee",
        description: "If we miss, you get a $250 service credit",
    },
    Benefit {
        icon: Icon::Wrench,
        title: "1-Year Maintenance",
        description: "Oil changes, tire rotations, multi-point inspections",
    },
    Benefit {
        icon: Icon::Sparkles,
        title: "Lifetime Car Washes",
        description: "Clean car, no hassle",
    },
    Benefit {
        icon: Icon::Shield,
        title: "VIP Service Access",
        description: "Guaranteed loaner on >2-hour services (or rideshare credit if fleet full)",
    },
    Benefit {
        icon: Icon::Home,
        title: "Home Delivery + DMV Concierge",
        description: "We handle plates, title, temp tags; you relax",
    },
    Benefit {
        icon: Icon::Check,
        title: "No-Regret 7-Day/300-Mile Exchange",
        description: "Swap once for any in-stock Nissan of equal/greater value; pay any price difference",
    },
];

pub const TESTIMONIALS_HEADING: &str = "What Our Customers Say";

/// Customer quotes, in display order.
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        rating: 5,
        quote: "True to their word - 58 minutes from walking in to driving out. The whole process was incredibly smooth.",
        author: "Sarah M., Chicago",
    },
    Testimonial {
        rating: 5,
        quote: "The home delivery was perfect. They handled all the DMV paperwork - I didn't have to do anything.",
        author: "Mike T., Naperville",
    },
    Testimonial {
        rating: 5,
        quote: "Used the 7-day exchange and it was hassle-free. Great peace of mind knowing I had that option.",
        author: "Jennifer L., Schaumburg",
    },
];

pub const FAQ_HEADING: &str = "Frequently Asked Questions";

/// FAQ entries. The index of an entry is its id in the `faq` query value.
pub const FAQS: &[Faq] = &[
    Faq {
        question: "Who qualifies for 0% APR?",
        answer: "0.0% APR for up to 60 months available on select new Nissan models to well-qualified buyers when financed through NMAC. Not all buyers will qualify. See dealer for details.",
    },
    Faq {
        question: "How is the 60 minutes measured?",
        answer: "Clock starts at scheduled appointment check-in once VIN is selected; stops at signed buyer's order. If we miss 60 minutes, a $250 service credit is issued at delivery.",
    },
    Faq {
        question: "Can I do home delivery?",
        answer: "Yes! Home delivery and DMV concierge services are included at no additional charge with the Zero-Stress Bundle.",
    },
    Faq {
        question: "What about trade-ins and negative equity?",
        answer: "We accept trade-ins and can work with negative equity situations. Our finance team will review your specific situation during the reservation process.",
    },
    Faq {
        question: "What are the doc fees and government fees?",
        answer: "Advertised price excludes tax, title, license, and the dealer documentary service fee (charged at the current Illinois maximum as permitted by law).",
    },
    Faq {
        question: "Can out-of-state buyers participate?",
        answer: "Yes, but residency restrictions may apply for financing. We can arrange delivery and handle DMV requirements for most neighboring states.",
    },
    Faq {
        question: "Can I really exchange it?",
        answer: "Yes! One exchange within 7 days/300 miles for an in-stock new Nissan of equal/greater value. Vehicle must be in substantially the same condition. See Exchange Addendum for complete terms.",
    },
    Faq {
        question: "What happens if the bundle sells out?",
        answer: "When all 25 bundles are gone, you can join our waitlist for the next batch. We'll notify you first when new bundles become available.",
    },
];

// ── Compliance footer ────────────────────────────────────────────────

/// Compliance footer blocks, in display order.
pub const DISCLOSURES: &[Disclosure] = &[
    Disclosure {
        heading: "APR/Finance:",
        body: "0.0% APR for up to 60 months available on select new Nissan models to well-qualified buyers when financed through NMAC. Example: $16.67 per $1,000 financed for 60 months. Actual down payment may vary. Residency restrictions may apply. Not all buyers will qualify. Dealer sets actual price. See dealer for details.",
    },
    Disclosure {
        heading: "Price/Fees:",
        body: "Advertised price excludes tax, title, license, and the dealer documentary service fee (charged at the current Illinois maximum as permitted by law). All vehicles available at advertised price unless marked sold; eligible VINs listed on this page.",
    },
    Disclosure {
        heading: "Included Items:",
        body: "Maintenance, car washes, VIP loaner access, and home delivery/DMV concierge are included at no additional charge with the Zero-Stress Nissan Bundle; conditions and limits apply (see details on this page).",
    },
    Disclosure {
        heading: "60-Minute Guarantee:",
        body: "Clock starts at scheduled appointment check-in once VIN is selected; stops at signed buyer's order. If we miss 60 minutes, a $250 service credit is issued at delivery; one per purchase.",
    },
    Disclosure {
        heading: "Exchange Policy:",
        body: "Exchange only, not a refund. One exchange within 7 days/300 miles for an in-stock new Nissan of equal/greater value; pay difference plus applicable taxes/fees; vehicle must be in substantially the same condition without accidents, modifications, or odors; exclusions apply including special-order, dealer-trade, CPO/used, and commercial/fleet units. See Exchange Addendum for complete terms.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_sizes() {
        assert_eq!(STEPS.len(), 3);
        assert_eq!(BENEFITS.len(), 6);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(FAQS.len(), 8);
        assert_eq!(DISCLOSURES.len(), 5);
        assert_eq!(HERO_CHECKLIST.len(), 6);
    }

    #[test]
    fn only_second_step_has_note() {
        let with_note: Vec<&str> = STEPS
            .iter()
            .filter(|s| s.note.is_some())
            .map(|s| s.number)
            .collect();
        assert_eq!(with_note, vec!["02"]);
    }

    #[test]
    fn testimonials_are_five_star() {
        assert!(TESTIMONIALS.iter().all(|t| t.rating == 5));
    }
}
