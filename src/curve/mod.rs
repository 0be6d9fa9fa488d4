//! Elliptic curve group laws
//!
//! - `short_weierstrass`: y² = x³ + ax + b, used for pairing groups G1 and G2
//! - `twisted_edwards`: a·x² + y² = 1 + d·x²·y², with a complete addition law
//!
//! Both are generic over a config trait that fixes the coordinate field and
//! the curve constants.

pub mod short_weierstrass;
pub mod twisted_edwards;

pub use short_weierstrass::SWCurveConfig;
pub use twisted_edwards::TECurveConfig;
