// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The vehicle catalog.
//!
//! Every category the facility accepts is a variant of [`VehicleCategory`].
//! Rates and labels are resolved with a `match`, so adding a category means
//! adding one variant and its two arms.

use serde::{Deserialize, Serialize};

/// A category of vehicle accepted by the facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleCategory {
    /// A passenger car.
    Car,
    /// A delivery van.
    DeliveryVan,
}

impl VehicleCategory {
    /// Every category, in the order the console menu presents them.
    pub const ALL: [Self; 2] = [Self::Car, Self::DeliveryVan];

    /// Returns the hourly rate in currency-agnostic units.
    #[must_use]
    pub const fn hourly_rate(self) -> f64 {
        match self {
            Self::Car => 5.0,
            Self::DeliveryVan => 8.0,
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::DeliveryVan => "Delivery van",
        }
    }

    /// Returns the stable identifier of this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::DeliveryVan => "delivery_van",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
