//! Embedded catalog data.
//!
//! Products are baked into the deployed artifact; there is no database and no
//! load-time IO. Editing the catalog means editing this module and shipping a
//! new build.

use vaultfit_core::ProductId;

use crate::product::{Category, Faq, Feature, Persona, Product, Specification, Variant};

fn feature(title: &str, description: &str) -> Feature {
    Feature {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn spec(name: &str, value: &str) -> Specification {
    Specification {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn faq(question: &str, answer: &str) -> Faq {
    Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn ids(items: &[&str]) -> Vec<ProductId> {
    items.iter().map(|s| ProductId::new(*s)).collect()
}

/// The full product catalog, in storefront order.
pub fn seed() -> Vec<Product> {
    vec![
        pt_starter_pack(),
        website_creation(),
        online_coaching_bundle(),
        ultimate_beginners_guide(),
    ]
}

fn pt_starter_pack() -> Product {
    Product {
        id: ProductId::new("pt-starter-pack"),
        name: "Personal Trainer Starter Pack".to_string(),
        hook: Some(
            "The ultimate toolkit to launch your PT business with confidence and professionalism."
                .to_string(),
        ),
        description: "The PT Starter Pack is an all-in-one digital bundle featuring 20+ \
            professionally designed, fully editable Canva templates tailored for new and \
            experienced Personal Trainers."
            .to_string(),
        detailed_description: Some(
            "The PT Starter Pack is an all-in-one digital bundle featuring 20+ professionally \
             designed, fully editable Canva templates tailored for new and experienced Personal \
             Trainers. These templates are built to help you streamline onboarding, automate \
             client management, showcase your services, and instantly upgrade your brand. From \
             service pricing sheets to social media content, client forms, and done-for-you \
             training programs, it's everything you need to start strong and grow faster."
                .to_string(),
        ),
        price_cents: 3999,
        original_price_cents: None,
        category: Category::Business,
        image: "https://i.imgur.com/nOXf3RT.png".to_string(),
        for_professionals: true,
        rating: 4.8,
        users_count: Some(250),
        in_stock: true,
        personas: vec![Persona::Trainer],
        tags: strings(&["new", "business", "templates"]),
        features: vec![
            feature(
                "Client Onboarding Tools",
                "Welcome packs, contracts, invoices & more",
            ),
            feature(
                "Training Program Templates",
                "Ready-to-use workout programs for clients",
            ),
            feature(
                "Social Media Templates",
                "Professional IG posts, reels & stories",
            ),
            feature(
                "Tracking & Goal Tools",
                "Client progress tracking made simple",
            ),
        ],
        specifications: vec![
            spec("Type", "Digital Bundle"),
            spec("Format", "Canva Templates"),
            spec("Templates", "20+ Professional Templates"),
            spec("Customization", "Fully Editable in Canva"),
            spec("Delivery", "Instant Download"),
            spec("Support", "Email Support Included"),
        ],
        includes: strings(&[
            "Client Onboarding Pack (Welcome Pack, Goodbye Pack, Contract, Invoice)",
            "Services & Pricing Sheet Template",
            "Business Card Template",
            "Client Forms (PAR-Q, Questionnaire)",
            "Workout Program Templates (Male & Female versions)",
            "Social Media Templates (IG Posts, Reels, Stories)",
            "Weight Loss Tracker Template",
        ]),
        perfect_for: strings(&[
            "New Personal Trainers just starting their business",
            "Aspiring coaches looking to fast-track their setup",
            "Solo PTs who want to save time and look polished",
            "Experienced PTs who want to refresh their brand",
            "Fitness business managers helping trainers onboard",
        ]),
        not_for: strings(&[
            "Trainers who prefer creating everything from scratch",
            "Those not using Canva for their design work",
            "Businesses needing completely custom branding",
        ]),
        faqs: vec![
            faq(
                "How does the product work?",
                "Open the PDF and click on any template button. You'll be taken to a Canva \
                 preview page, no Canva Pro required. Click \"Use Template\", customize with \
                 your brand, and you're done.",
            ),
            faq(
                "Do I need Canva Pro to use these templates?",
                "No, you can use these templates with a free Canva account. Some premium Canva \
                 elements may require a Canva Pro subscription if you want to customize further.",
            ),
            faq(
                "Can I reuse the templates for multiple clients?",
                "Yes! The templates can be reused again and again for different clients or \
                 promotions, giving you endless value.",
            ),
            faq(
                "Can I resell this product?",
                "This pack can be resold or bundled as part of a PT coaching course, mentorship \
                 offer, or onboarding toolkit for gym chains.",
            ),
        ],
        variants: vec![],
        gallery: strings(&[
            "https://i.imgur.com/nOXf3RT.png",
            "https://i.imgur.com/NGamAGW.png",
            "https://i.imgur.com/hMYbAmi.png",
            "https://i.imgur.com/kWcHlcx.png",
            "https://i.imgur.com/nxesBTW.png",
            "https://i.imgur.com/4vEnQzG.png",
            "https://i.imgur.com/bltP0f3.png",
            "https://i.imgur.com/1g7LVJF.png",
        ]),
        related: ids(&["website-creation", "online-coaching-bundle"]),
        checkout_url: Some("https://buy.stripe.com/pt-starter-pack".to_string()),
    }
}

fn website_creation() -> Product {
    Product {
        id: ProductId::new("website-creation"),
        name: "Professional Landing Page for Personal Trainers".to_string(),
        hook: Some(
            "Transform Your PT Business with a Professional Online Presence - In Minutes"
                .to_string(),
        ),
        description: "Grow your PT business online with a high-converting, done-for-you landing \
            page. Limited-time offer - $99 for a comprehensive business bundle."
            .to_string(),
        detailed_description: Some(
            "In today's digital world, standing out online is crucial. Get a conversion-focused \
             landing page that attracts clients, no tech skills required. Our team of expert \
             designers will create a professional, mobile-responsive landing page that showcases \
             your training services, increases client inquiries, and establishes your online \
             credibility, all without the hassle of learning web design or paying thousands to \
             a web developer."
                .to_string(),
        ),
        price_cents: 9900,
        original_price_cents: Some(49_900),
        category: Category::Business,
        image: "https://i.imgur.com/IyR02Mx.png".to_string(),
        for_professionals: true,
        rating: 4.9,
        users_count: Some(320),
        in_stock: true,
        personas: vec![Persona::Trainer],
        tags: strings(&["new", "bestseller", "service"]),
        features: vec![
            feature(
                "Professional Landing Page",
                "Converts visitors into leads effectively",
            ),
            feature("Social Media Templates", "1500+ ready to go templates"),
            feature("No Tech Setup", "Fully handled for you by our team"),
            feature(
                "White-Labeled Recipes",
                "12 ready-to-share healthy recipes",
            ),
        ],
        specifications: vec![
            spec("Type", "Digital Service"),
            spec("Delivery Time", "2-3 business days"),
            spec("Updates", "Free minor updates for 30 days"),
            spec("Hosting", "Fully hosted solution included"),
            spec("Mobile Responsive", "Yes, fully responsive design"),
            spec("Support", "Email Support Included"),
        ],
        includes: strings(&[
            "Professional Landing Page (Value: $199)",
            "Social Media Content Templates (1500+ templates) (Value: $78)",
            "Direct Inquiry Routing System (Value: $149)",
            "12 White-Labeled Healthy Recipes (Value: $73)",
        ]),
        perfect_for: strings(&[
            "Personal trainers looking to grow their client base online",
            "Fitness professionals without technical web design skills",
            "Trainers who want to establish a professional online presence",
            "Coaches who need to convert more website visitors into clients",
        ]),
        not_for: strings(&[
            "Those who need a multi-page website with advanced features",
            "Businesses requiring e-commerce functionality",
            "Trainers not ready to establish an online presence",
        ]),
        faqs: vec![
            faq(
                "How does the process work?",
                "After purchase, you'll complete a simple 5-minute form about your business. \
                 Our team will build your professional landing page, and you'll start receiving \
                 client inquiries directly to your inbox.",
            ),
            faq(
                "Do I need to provide any content?",
                "We'll need basic information about your business and services, but we handle \
                 all design, layout, and technical aspects. You'll have the opportunity to \
                 provide any specific text or imagery you'd like to include.",
            ),
            faq(
                "Can I customize the landing page?",
                "Yes! Your landing page will be built according to your branding preferences. \
                 We'll match your colors, include your logo, and highlight your specific \
                 services.",
            ),
            faq(
                "What about hosting and domain costs?",
                "Hosting is included in the package at no additional cost. If you already have \
                 a domain, we can use that. If not, we can help you purchase one (domain costs \
                 not included).",
            ),
        ],
        variants: vec![Variant {
            id: "website-creation-basic".to_string(),
            name: "Basic Landing Page".to_string(),
            image: "https://i.imgur.com/IyR02Mx.png".to_string(),
            color_name: "Basic".to_string(),
        }],
        gallery: strings(&["https://i.imgur.com/IyR02Mx.png"]),
        related: ids(&[
            "online-coaching-bundle",
            "pt-business-toolkit",
            "pt-starter-pack",
        ]),
        checkout_url: Some("https://buy.stripe.com/dR69BK9KA3cD8o0cMR".to_string()),
    }
}

fn online_coaching_bundle() -> Product {
    Product {
        id: ProductId::new("online-coaching-bundle"),
        name: "Online Coaching & Social Media Bundle".to_string(),
        hook: Some(
            "Everything You Need to Launch Your Online Coaching Brand - In One Powerful Package"
                .to_string(),
        ),
        description: "Everything you need to launch your online coaching brand - in one powerful \
            package. Includes a custom website and 1800+ social media templates."
            .to_string(),
        detailed_description: Some(
            "The ONLINE COACHING BUNDLE is crafted for fitness professionals who want to \
             establish a powerful online presence. This meticulously designed package combines \
             all the essential elements to create a cohesive brand and effective marketing \
             strategy. With this bundle, you'll get a professionally designed website that \
             converts visitors into clients, plus an extensive library of social media templates \
             to maintain consistent, engaging content."
                .to_string(),
        ),
        price_cents: 29_999,
        original_price_cents: Some(59_900),
        category: Category::Business,
        image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?auto=format&fit=crop&q=80&w=1920"
            .to_string(),
        for_professionals: true,
        rating: 4.9,
        users_count: Some(850),
        in_stock: true,
        personas: vec![Persona::Trainer],
        tags: strings(&["new", "bestseller"]),
        features: vec![
            feature(
                "Custom Website",
                "Professional 4-page site built for your brand",
            ),
            feature("Social Templates", "1800+ ready-to-use Canva templates"),
            feature(
                "Brand Kit Setup",
                "Complete branding package with your colors & style",
            ),
            feature(
                "Content Categories",
                "Workout tips, nutrition, transformations & more",
            ),
        ],
        specifications: vec![
            spec("Type", "Digital Bundle"),
            spec("Version", "2024 Edition"),
            spec("Updates", "Free updates for 1 year"),
            spec("Templates", "1800+ Canva Templates"),
            spec("Website", "4-page Professional Site"),
            spec("Support", "Email + Priority Chat"),
        ],
        includes: strings(&[
            "Custom 4-page website with your branding",
            "1800+ editable social media templates",
            "Brand kit setup and guidance",
            "Step-by-step setup tutorials",
            "Content strategy training",
            "Lead generation guidance",
        ]),
        perfect_for: strings(&[
            "Personal Trainers ready to take their coaching business online",
            "Coaches wanting to stand out on social media without the design stress",
            "Fitness professionals who want a website but don't know where to start",
            "Anyone tired of winging it with Canva or inconsistent posting",
        ]),
        not_for: strings(&[
            "Trainers not ready to commit to online coaching",
            "Those who prefer to create everything from scratch",
            "Businesses needing complex e-commerce solutions",
        ]),
        faqs: vec![],
        variants: vec![],
        gallery: vec![],
        related: ids(&["website-creation", "pt-starter-pack"]),
        checkout_url: None,
    }
}

fn ultimate_beginners_guide() -> Product {
    Product {
        id: ProductId::new("ultimate-beginners-guide"),
        name: "The Ultimate Beginners Guide".to_string(),
        hook: Some(
            "The most effective programming methods for beginner lifters who want to lose body \
             fat, build lean muscle, & completely transform their physique."
                .to_string(),
        ),
        description: "The most effective programming methods for beginner lifters who want to \
            lose body fat, build lean muscle, & completely transform their physique."
            .to_string(),
        detailed_description: None,
        price_cents: 9700,
        original_price_cents: Some(29_700),
        category: Category::Programs,
        image: "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?auto=format&fit=crop&q=80&w=1920"
            .to_string(),
        for_professionals: false,
        rating: 4.9,
        users_count: Some(120_000),
        in_stock: true,
        personas: vec![Persona::Individual],
        tags: strings(&["programs", "science-backed"]),
        features: vec![
            feature(
                "Step-by-step Training Program",
                "Full gym and home workouts tailored for beginners",
            ),
            feature(
                "Video Exercise Library",
                "100+ detailed exercise demonstrations",
            ),
            feature(
                "Nutrition Framework",
                "Simple, sustainable meal planning guide",
            ),
            feature(
                "Progress Tracking",
                "Easy-to-use workout and measurement logs",
            ),
            feature("Form Mastery", "Technique guides for all major exercises"),
            feature("Community Support", "Access to private support community"),
        ],
        specifications: vec![],
        includes: vec![],
        perfect_for: vec![],
        not_for: vec![],
        faqs: vec![],
        variants: vec![],
        gallery: vec![],
        related: vec![],
        checkout_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_contains_the_full_catalog() {
        let products = seed();
        assert_eq!(products.len(), 4);
        let slugs: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            slugs,
            vec![
                "pt-starter-pack",
                "website-creation",
                "online-coaching-bundle",
                "ultimate-beginners-guide",
            ]
        );
    }

    #[test]
    fn seed_ids_are_unique() {
        let products = seed();
        let mut slugs: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), products.len());
    }

    #[test]
    fn seed_prices_match_the_storefront() {
        let products = seed();
        assert_eq!(products[0].price_cents, 3999);
        assert_eq!(products[1].price_cents, 9900);
        assert_eq!(products[2].price_cents, 29_999);
        assert_eq!(products[3].price_cents, 9700);
    }
}
