//! Static copy for the site.

use chrono::NaiveDate;

pub const FIRM_NAME: &str = "Lawson & Partners";
pub const FIRM_EMAIL: &str = "info@lawsonpartners.com";
pub const FIRM_PHONE: &str = "+91 123456789";

pub const FREE_CONSULTATION_HREF: &str = "#free consultation";
pub const FREE_CONSULTATION_NOTICE: &str = "Currently, free consultation is temporarily unavailable. You can share your problem through the mail (info@lawsonpartners.com) or phone call: +91 123456789";

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Home", href: "#" },
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Practice Areas", href: "#practice" },
    NavItem { label: "Insights", href: "#blog" },
    NavItem { label: "FAQ", href: "#faq" },
    NavItem { label: "Contact", href: "#contact" },
];

pub struct PracticeArea {
    pub slug: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

pub const PRACTICE_AREAS: [PracticeArea; 4] = [
    PracticeArea {
        slug: "corporate",
        icon: "fas fa-building",
        title: "Corporate Law",
        summary: "Formation, governance and transactions for companies from start-ups to listed groups.",
        details: &[
            "Company incorporation and shareholder agreements",
            "Mergers, acquisitions and due diligence",
            "Board advisory and regulatory compliance",
        ],
    },
    PracticeArea {
        slug: "family",
        icon: "fas fa-users",
        title: "Family Law",
        summary: "Sensitive, discreet counsel through divorce, custody and succession matters.",
        details: &[
            "Divorce and separation settlements",
            "Child custody and maintenance",
            "Wills, trusts and estate disputes",
        ],
    },
    PracticeArea {
        slug: "criminal",
        icon: "fas fa-gavel",
        title: "Criminal Defense",
        summary: "Vigorous representation at every stage, from investigation to appeal.",
        details: &[
            "Bail applications and pre-trial strategy",
            "White-collar and economic offences",
            "Appeals and revision petitions",
        ],
    },
    PracticeArea {
        slug: "property",
        icon: "fas fa-home",
        title: "Real Estate",
        summary: "Clear titles, sound contracts and fast resolution of property disputes.",
        details: &[
            "Title verification and conveyancing",
            "Lease and development agreements",
            "Landlord and tenant litigation",
        ],
    },
];

pub struct BlogPost {
    pub title: &'static str,
    pub published: (i32, u32, u32),
    pub excerpt: &'static str,
    pub body: &'static [&'static str],
}

impl BlogPost {
    pub fn published_label(&self) -> String {
        let (year, month, day) = self.published;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

pub const BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "What to Bring to Your First Consultation",
        published: (2025, 3, 14),
        excerpt: "A little preparation makes the first meeting with your lawyer far more productive.",
        body: &[
            "Gather every document related to your matter: contracts, notices, emails and receipts.",
            "Write a short timeline of events in your own words before the meeting.",
            "List the outcome you are hoping for, even if you are unsure it is realistic.",
        ],
    },
    BlogPost {
        title: "Understanding Limitation Periods",
        published: (2025, 5, 2),
        excerpt: "Most claims must be filed within a fixed window. Missing it can end a case before it starts.",
        body: &[
            "Limitation periods vary by the type of claim and usually run from the date the cause of action arose.",
            "Some periods can be extended, for example where fraud concealed the facts.",
            "When in doubt, speak to counsel early rather than waiting for the deadline.",
        ],
    },
    BlogPost {
        title: "Drafting a Will That Holds Up",
        published: (2025, 8, 21),
        excerpt: "Simple mistakes in execution are the most common reason wills are challenged.",
        body: &[
            "Sign in the presence of two witnesses who are not beneficiaries.",
            "Name an executor you trust and tell them where the original is kept.",
            "Review the will after marriage, divorce, births or a major change in assets.",
        ],
    },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "How much does an initial consultation cost?",
        answer: "Fees depend on the practice area and complexity of the matter. We confirm the fee in writing before the consultation begins.",
    },
    FaqEntry {
        question: "Do you handle cases outside the city?",
        answer: "Yes. We appear before courts and tribunals across the state and work with trusted associates elsewhere.",
    },
    FaqEntry {
        question: "How long will my case take?",
        answer: "Timelines vary widely. After reviewing your documents we give an honest estimate and keep you updated at every stage.",
    },
    FaqEntry {
        question: "Is my information kept confidential?",
        answer: "Always. Everything you share with us is protected by attorney-client privilege from the first conversation.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_dates_render_long_form() {
        assert_eq!(BLOG_POSTS[0].published_label(), "March 14, 2025");
    }

    #[test]
    fn invalid_dates_render_empty() {
        let post = BlogPost {
            title: "",
            published: (2025, 2, 30),
            excerpt: "",
            body: &[],
        };
        assert_eq!(post.published_label(), "");
    }

    #[test]
    fn nav_starts_with_home_link() {
        assert_eq!(NAV_ITEMS[0].href, crate::view_state::active_section::HOME_HREF);
        assert!(NAV_ITEMS[1..].iter().all(|item| item.href.starts_with('#') && item.href.len() > 1));
    }
}
