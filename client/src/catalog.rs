//! Seed catalog: the read-only mock projects and templates.
//!
//! DESIGN
//! ======
//! Every page that lists projects or templates reads them from here, so the
//! showcase grid, the detail page, the home preview and the wizard all agree.
//! Records are `'static` and never mutated.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Serialize, Serializer};
use time::Date;
use time::macros::date;

/// Project category used by the showcase filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Marketplace,
    Saas,
    Booking,
    Social,
    Chatbot,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Marketplace,
        Category::Saas,
        Category::Booking,
        Category::Social,
        Category::Chatbot,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Marketplace => "marketplace",
            Self::Saas => "saas",
            Self::Booking => "booking",
            Self::Social => "social",
            Self::Chatbot => "chatbot",
        }
    }

    /// Badge text on cards ("Saas", "Booking", ...).
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Self::Marketplace => "Marketplace",
            Self::Saas => "Saas",
            Self::Booking => "Booking",
            Self::Social => "Social",
            Self::Chatbot => "Chatbot",
        }
    }

    /// Filter button text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Saas => "SaaS",
            other => other.badge(),
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == raw)
    }
}

/// A showcased prototype.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub category: Category,
    pub waitlist_count: u32,
    pub author: &'static str,
    #[serde(serialize_with = "serialize_date")]
    pub published: Date,
    pub features: &'static [&'static str],
}

impl Project {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/prototype/{}", self.id)
    }

    /// Shown as "Prototype Views" on the detail page.
    #[must_use]
    pub fn prototype_views(&self) -> u32 {
        self.waitlist_count.saturating_mul(5)
    }
}

/// A starter template in the gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    /// Short name used on the home page and in the wizard.
    pub short_name: &'static str,
    pub description: &'static str,
    /// Tagline used on the home page and in the wizard.
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub image_url: &'static str,
    pub category_label: &'static str,
}

impl Template {
    #[must_use]
    pub fn wizard_href(&self) -> String {
        format!("/wizard?template={}", self.id)
    }

    /// The first three features, as listed on gallery cards.
    #[must_use]
    pub fn key_features(&self) -> &'static [&'static str] {
        &self.features[..self.features.len().min(3)]
    }
}

fn serialize_date<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(date)
}

macro_rules! pexels {
    ($id:literal) => {
        concat!(
            "https://images.pexels.com/photos/",
            $id,
            "/pexels-photo-",
            $id,
            ".jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"
        )
    };
}

static PROJECTS: [Project; 6] = [
    Project {
        id: "skillshare",
        name: "SkillShare Connect",
        description: "Marketplace for connecting skilled professionals with local projects",
        image_url: pexels!("3184465"),
        category: Category::Marketplace,
        waitlist_count: 47,
        author: "Sarah Johnson",
        published: date!(2025 - 05 - 15),
        features: &["Skill Matching", "Project Listings", "Secure Payments", "Reviews", "Messaging"],
    },
    Project {
        id: "analytiq",
        name: "AnalytiQ",
        description: "AI-powered business analytics dashboard for small businesses",
        image_url: pexels!("590022"),
        category: Category::Saas,
        waitlist_count: 124,
        author: "Michael Chen",
        published: date!(2025 - 05 - 12),
        features: &["Data Visualization", "AI Insights", "Custom Reports", "Goal Tracking", "Integrations"],
    },
    Project {
        id: "petcare",
        name: "PetCare Connect",
        description: "Book pet sitting and walking services in your neighborhood",
        image_url: pexels!("1629781"),
        category: Category::Booking,
        waitlist_count: 83,
        author: "Emma Rodriguez",
        published: date!(2025 - 05 - 10),
        features: &["Caregiver Profiles", "Calendar Booking", "In-app Payments", "Pet Profiles", "Real-time Updates"],
    },
    Project {
        id: "foodie",
        name: "FoodieShare",
        description: "Social network for sharing and discovering local food experiences",
        image_url: pexels!("1640774"),
        category: Category::Social,
        waitlist_count: 62,
        author: "David Kim",
        published: date!(2025 - 05 - 08),
        features: &["Recipe Sharing", "Restaurant Reviews", "Food Maps", "Meetup Organization", "Photo Galleries"],
    },
    Project {
        id: "healthbot",
        name: "HealthBot",
        description: "AI chatbot that provides personalized wellness recommendations",
        image_url: pexels!("4506109"),
        category: Category::Chatbot,
        waitlist_count: 156,
        author: "Priya Patel",
        published: date!(2025 - 05 - 05),
        features: &["Personalized Advice", "Symptom Checker", "Medication Reminders", "Health Tracking", "Doctor Referrals"],
    },
    Project {
        id: "eventify",
        name: "Eventify",
        description: "Event planning and ticket booking platform for local events",
        image_url: pexels!("2608517"),
        category: Category::Booking,
        waitlist_count: 74,
        author: "James Wilson",
        published: date!(2025 - 05 - 02),
        features: &["Event Creation", "Ticket Sales", "Attendee Management", "Event Discovery", "Calendar Integration"],
    },
];

static TEMPLATES: [Template; 6] = [
    Template {
        id: "marketplace",
        name: "Marketplace Platform",
        short_name: "Marketplace",
        description: "Two-sided platform connecting buyers and sellers",
        tagline: "Two-sided platform for buyers and sellers",
        features: &["User profiles", "Product listings", "Search & filter", "Messaging", "Reviews & ratings"],
        image_url: pexels!("5833754"),
        category_label: "E-commerce",
    },
    Template {
        id: "saas",
        name: "SaaS Dashboard",
        short_name: "SaaS Dashboard",
        description: "User portal for subscription-based services",
        tagline: "User portal for subscription services",
        features: &["User management", "Analytics dashboard", "Settings panel", "Subscription management", "Notifications"],
        image_url: pexels!("8391440"),
        category_label: "Business",
    },
    Template {
        id: "booking",
        name: "Booking Platform",
        short_name: "Booking Platform",
        description: "Appointment and reservation system",
        tagline: "Appointment and reservation system",
        features: &["Calendar view", "Availability management", "Notifications", "Payment integration", "User accounts"],
        image_url: pexels!("7148384"),
        category_label: "Service",
    },
    Template {
        id: "social",
        name: "Social Feed",
        short_name: "Social Feed",
        description: "Content sharing and social interaction platform",
        tagline: "Content sharing and social interaction",
        features: &["User profiles", "Content feed", "Comments & reactions", "Follow system", "Notifications"],
        image_url: pexels!("607812"),
        category_label: "Social",
    },
    Template {
        id: "chatbot",
        name: "Chatbot Interface",
        short_name: "Chatbot Interface",
        description: "Conversational user experience",
        tagline: "Conversational user experience",
        features: &["Chat interface", "AI responses", "User input handling", "Custom persona", "Integration ready"],
        image_url: pexels!("8386434"),
        category_label: "AI",
    },
    Template {
        id: "landing",
        name: "Landing Page",
        short_name: "Landing Page",
        description: "Conversion-focused single page website",
        tagline: "Conversion-focused single page website",
        features: &["Hero section", "Feature showcase", "Testimonials", "Pricing", "Contact form"],
        image_url: pexels!("196644"),
        category_label: "Marketing",
    },
];

#[must_use]
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

#[must_use]
pub fn templates() -> &'static [Template] {
    &TEMPLATES
}

#[must_use]
pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[must_use]
pub fn find_template(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Home page preview: the first three templates.
#[must_use]
pub fn featured_templates() -> &'static [Template] {
    &TEMPLATES[..3]
}

/// Wizard step 3 choices: every template except the landing page.
pub fn wizard_templates() -> impl Iterator<Item = &'static Template> {
    TEMPLATES.iter().filter(|t| t.id != "landing")
}
