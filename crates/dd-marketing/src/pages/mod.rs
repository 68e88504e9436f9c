//! Marketing site pages

mod pricing;

pub use pricing::PricingPage;
