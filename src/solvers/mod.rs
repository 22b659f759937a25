//! Numerical integration of the pendulum equation of motion
//!
//! - Semi-implicit (symplectic) Euler with a per-step damping factor

mod semi_implicit_euler;

pub use semi_implicit_euler::SemiImplicitEuler;
