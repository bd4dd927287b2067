//! Copy for the landing page sections, rendered into `templates/html/home.html`.

use serde::Serialize;

/// Everything the landing page renders besides the waitlist form.
#[derive(Debug, Clone, Serialize)]
pub struct LandingContent {
    pub product_name: String,
    pub hero: Hero,
    pub features: Section<Feature>,
    pub pricing: Section<PricingTier>,
    pub testimonials: Section<Testimonial>,
    pub waitlist: SectionHeading,
    pub footer_note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub headline_accent: String,
    pub subheadline: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: String,
}

/// A titled section holding a list of items.
#[derive(Debug, Clone, Serialize)]
pub struct Section<T> {
    pub heading: SectionHeading,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    /// Name of the inline svg icon partial.
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub period: Option<String>,
    pub tagline: String,
    pub perks: Vec<String>,
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub author_name: String,
    pub author_title: String,
    /// Shown in the avatar circle.
    pub initials: String,
    pub rating: u8,
}

impl Testimonial {
    pub fn new(quote: &str, author_name: &str, author_title: &str) -> Self {
        Self {
            quote: quote.to_string(),
            author_name: author_name.to_string(),
            author_title: author_title.to_string(),
            initials: initials(author_name),
            rating: 5,
        }
    }
}

/// Uppercase first letters of the first two words of a name.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

impl SectionHeading {
    pub fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

impl Stat {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

impl Feature {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            product_name: "StackOptimizer".to_string(),
            hero: Hero {
                badge: "Save 20-40% on SaaS spend automatically".to_string(),
                headline: "Stop Overpaying for SaaS".to_string(),
                headline_accent: "You Don't Use".to_string(),
                subheadline: "Audit idle seats, execute downgrades safely, migrate history without risk. \
                    AI-powered optimization that keeps your stack lean and cost-efficient."
                    .to_string(),
                primary_cta: "Join the Waitlist".to_string(),
                secondary_cta: "See How It Works".to_string(),
                stats: vec![
                    Stat::new("$2.4M+", "Saved by early users"),
                    Stat::new("847", "Companies on waitlist"),
                    Stat::new("32%", "Avg. cost reduction"),
                ],
            },
            features: Section {
                heading: SectionHeading::new(
                    "How StackOptimizer Works",
                    "Four powerful capabilities that work together to optimize your SaaS spend.",
                ),
                items: vec![
                    Feature::new(
                        "search",
                        "Instant Usage Audit",
                        "Connect your SaaS stack and get a complete usage report in minutes. \
                        See exactly which seats are idle and which features go unused.",
                    ),
                    Feature::new(
                        "trending-down",
                        "Smart Downgrade Recommendations",
                        "AI analyzes your actual usage patterns and suggests safe plan changes. \
                        No guesswork, just data-driven decisions.",
                    ),
                    Feature::new(
                        "database",
                        "Zero-Loss Data Migration",
                        "Execute plan changes with confidence. Our smart migration ensures \
                        all your data and history transfers safely during downgrades.",
                    ),
                    Feature::new(
                        "bell",
                        "Ongoing Hygiene Alerts",
                        "Continuous monitoring catches new waste as it happens. Get alerts \
                        when usage drops or when cheaper alternatives emerge.",
                    ),
                ],
            },
            pricing: Section {
                heading: SectionHeading::new(
                    "Simple, Transparent Pricing",
                    "Start free, upgrade when you need more power.",
                ),
                items: vec![
                    PricingTier {
                        name: "Free".to_string(),
                        price: "$0".to_string(),
                        period: None,
                        tagline: "Forever free for basic audits".to_string(),
                        perks: vec![
                            "Connect up to 5 SaaS apps".to_string(),
                            "Monthly usage audits".to_string(),
                            "Basic recommendations".to_string(),
                        ],
                        highlight: None,
                    },
                    PricingTier {
                        name: "Premium".to_string(),
                        price: "$29".to_string(),
                        period: Some("mo".to_string()),
                        tagline: "Full automation and insights".to_string(),
                        perks: vec![
                            "Unlimited SaaS connections".to_string(),
                            "Real-time monitoring".to_string(),
                            "Auto-execute downgrades".to_string(),
                            "Zero-loss data migration".to_string(),
                        ],
                        highlight: Some("Most Popular".to_string()),
                    },
                ],
            },
            testimonials: Section {
                heading: SectionHeading::new(
                    "Trusted by Cost-Conscious Teams",
                    "See what early beta users are saying about StackOptimizer.",
                ),
                items: vec![
                    Testimonial::new(
                        "Saved $8k/year on forgotten tools - no more surprises on our credit card statements!",
                        "Jamie Martinez",
                        "Founder, TechFlow",
                    ),
                    Testimonial::new(
                        "We had 47 unused Notion seats. StackOptimizer found them in seconds and helped us downgrade safely.",
                        "Sarah Kim",
                        "Ops Lead, Scaleup Inc",
                    ),
                    Testimonial::new(
                        "As a freelancer, every dollar counts. This tool paid for itself in the first week.",
                        "Alex Liu",
                        "Freelance Developer",
                    ),
                ],
            },
            waitlist: SectionHeading::new(
                "Get Early Access",
                "Join the waitlist to be among the first to optimize your SaaS stack \
                and start saving money automatically.",
            ),
            footer_note: "Coming Soon 2026".to_string(),
        }
    }
}
