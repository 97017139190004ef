//! Layer 3: Algorithms
//!
//! This layer implements the Huber-type correlation estimators, each one
//! building on the previous: univariate, adjusted univariate, and bivariate
//! winsorization. It is orchestrated by the engine layer.

// Symmetric winsorization.
pub mod univariate;

// Quadrant-adjusted winsorization.
pub mod adjusted;

// Ellipsoidal (Mahalanobis) winsorization.
pub mod bivariate;

// Estimator selection and tuning constants.
pub mod method;
