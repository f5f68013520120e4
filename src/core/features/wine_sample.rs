use crate::core::features::FeatureVector;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_fixed_acidity() -> f64 {
    7.0
}
fn default_volatile_acidity() -> f64 {
    0.3
}
fn default_citric_acid() -> f64 {
    0.3
}
fn default_residual_sugar() -> f64 {
    20.0
}
fn default_chlorides() -> f64 {
    0.08
}
fn default_free_sulfur_dioxide() -> f64 {
    15.0
}
fn default_total_sulfur_dioxide() -> f64 {
    70.0
}
fn default_density() -> f64 {
    1.0
}
fn default_ph() -> f64 {
    3.0
}
fn default_sulphates() -> f64 {
    0.5
}
fn default_alcohol() -> f64 {
    9.0
}

/// Physicochemical measurements of one wine, as collected by the form.
///
/// Field declaration order is the order the form asks for them in; the
/// order fed to the model is fixed by [`WineSample::to_feature_vector`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WineSample {
    #[serde(default = "default_fixed_acidity")]
    #[schemars(
        title = "Fixed Acidity",
        description = "Enter the fixed acidity of the wine",
        range(min = 0.0)
    )]
    pub fixed_acidity: f64,

    #[serde(default = "default_volatile_acidity")]
    #[schemars(
        title = "Volatile Acidity",
        description = "Enter the volatile acidity of the wine",
        range(min = 0.0)
    )]
    pub volatile_acidity: f64,

    #[serde(default = "default_citric_acid")]
    #[schemars(
        title = "Citric Acid",
        description = "Enter the citric acid content of the wine",
        range(min = 0.0)
    )]
    pub citric_acid: f64,

    #[serde(default = "default_residual_sugar")]
    #[schemars(
        title = "Residual Sugar",
        description = "Enter the residual sugar content of the wine",
        range(min = 0.0)
    )]
    pub residual_sugar: f64,

    #[serde(default = "default_chlorides")]
    #[schemars(
        title = "Chlorides",
        description = "Enter the chloride content of the wine",
        range(min = 0.0)
    )]
    pub chlorides: f64,

    #[serde(default = "default_free_sulfur_dioxide")]
    #[schemars(
        title = "Free Sulfur Dioxide",
        description = "Enter the free sulfur dioxide content of the wine",
        range(min = 0.0)
    )]
    pub free_sulfur_dioxide: f64,

    #[serde(default = "default_total_sulfur_dioxide")]
    #[schemars(
        title = "Total Sulfur Dioxide",
        description = "Enter the total sulfur dioxide content of the wine",
        range(min = 0.0)
    )]
    pub total_sulfur_dioxide: f64,

    #[serde(default = "default_density")]
    #[schemars(
        title = "Density",
        description = "Enter the density of the wine",
        range(min = 0.0)
    )]
    pub density: f64,

    #[serde(default = "default_ph")]
    #[schemars(
        title = "pH",
        description = "Enter the pH level of the wine",
        range(min = 0.0)
    )]
    pub ph: f64,

    #[serde(default = "default_sulphates")]
    #[schemars(
        title = "Sulphates",
        description = "Enter the sulphates content of the wine",
        range(min = 0.0)
    )]
    pub sulphates: f64,

    #[serde(default = "default_alcohol")]
    #[schemars(
        title = "Alcohol",
        description = "Enter the alcohol content of the wine",
        range(min = 0.0)
    )]
    pub alcohol: f64,
}

impl Default for WineSample {
    fn default() -> Self {
        Self {
            fixed_acidity: default_fixed_acidity(),
            volatile_acidity: default_volatile_acidity(),
            citric_acid: default_citric_acid(),
            residual_sugar: default_residual_sugar(),
            chlorides: default_chlorides(),
            free_sulfur_dioxide: default_free_sulfur_dioxide(),
            total_sulfur_dioxide: default_total_sulfur_dioxide(),
            density: default_density(),
            ph: default_ph(),
            sulphates: default_sulphates(),
            alcohol: default_alcohol(),
        }
    }
}

impl WineSample {
    pub fn to_feature_vector(&self) -> FeatureVector {
        FeatureVector::new(vec![
            self.fixed_acidity,
            self.volatile_acidity,
            self.citric_acid,
            self.residual_sugar,
            self.chlorides,
            self.free_sulfur_dioxide,
            self.total_sulfur_dioxide,
            self.density,
            self.ph,
            self.sulphates,
            self.alcohol,
        ])
    }
}
