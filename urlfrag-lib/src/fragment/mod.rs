mod builder;
mod policy;
mod predicate;

pub use builder::FragmentPolicyBuilder;
pub use policy::FragmentPolicy;
pub use predicate::{FragmentPredicate, absent, empty, exact};
