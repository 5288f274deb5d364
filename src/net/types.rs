//! Shared DTOs for the marketplace REST API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON shapes (Mongo-style `_id` keys and
//! camelCase fields) via serde renames so fetch code stays schema-driven.
//! Preference values are closed enumerations parsed at the form boundary;
//! free-form strings never cross into a payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A rental contract as returned by `/api/contract/tenant/{user_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Unique contract identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Property this contract is attached to (embedded reference).
    #[serde(rename = "propertyId")]
    pub property: ContractProperty,
    /// Move-in date as an ISO date string.
    #[serde(rename = "startDate")]
    pub start_date: String,
    /// Move-out date as an ISO date string.
    #[serde(rename = "endDate")]
    pub end_date: String,
    /// Status code; `"1"` means the lease is active.
    pub status: String,
    /// Tenant-side aggregates for this contract.
    pub tenant: ContractTenant,
}

/// Property reference embedded in a contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractProperty {
    #[serde(rename = "_id")]
    pub id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    /// Property kind label (e.g. `"Apartamento"`, `"Casa"`).
    #[serde(rename = "type")]
    pub kind: String,
}

/// Tenant aggregates embedded in a contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractTenant {
    #[serde(rename = "avgRating")]
    pub avg_rating: f64,
}

/// A property record from `/api/property/{property_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: String,
    pub address: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Attached media, first entry is the cover image.
    #[serde(default)]
    pub media: Vec<PropertyMedia>,
    /// Applicants for this property; only the count is rendered here.
    #[serde(default)]
    pub candidates: Vec<serde_json::Value>,
}

impl Property {
    /// URL of the cover image, if any media is attached.
    pub fn cover_url(&self) -> Option<&str> {
        self.media.first().map(|m| m.media_url.as_str())
    }
}

/// A single media attachment on a property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyMedia {
    #[serde(rename = "mediaUrl")]
    pub media_url: String,
}

/// A tenant summary from `/api/tenant`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TenantSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Avatar URL; initials are rendered when absent.
    #[serde(default)]
    pub image: Option<String>,
    /// Classification label (e.g. `"Estudiante"`, `"Profesional"`).
    pub classification: String,
    pub rating: f64,
    pub email: String,
    pub phone: String,
    #[serde(rename = "currentProperty")]
    pub current_property: String,
    #[serde(rename = "monthlyRent")]
    pub monthly_rent: f64,
}

/// The session user as returned by the identity collaborator (`/api/auth/me`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Subject identifier, possibly carrying a `provider|` prefix.
    pub sub: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
}

/// Marketplace role a user can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tenant,
    Landlord,
}

impl Role {
    /// Wire value sent to the role-assignment endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::Landlord => "landlord",
        }
    }

    /// Product-facing title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Tenant => "Inquilino",
            Self::Landlord => "Arrendatario",
        }
    }
}

/// Validated preference payload handed to the profile-creation flow.
///
/// The role tag selects which field set applies; there is no shared shape
/// between the two variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferencePayload {
    Tenant(TenantPreferences),
    Landlord(LandlordPreferences),
}

/// Housing preferences collected from a tenant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TenantPreferences {
    #[serde(rename = "ubicacion")]
    pub location: String,
    #[serde(rename = "presupuesto")]
    pub budget: String,
    #[serde(rename = "habitaciones")]
    pub rooms: String,
    #[serde(rename = "areaCuadrada")]
    pub min_area: String,
    #[serde(rename = "duracionContrato")]
    pub contract_duration: ContractDuration,
    #[serde(rename = "mascotas")]
    pub pets: YesNo,
}

/// Tenant-screening preferences collected from a landlord.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandlordPreferences {
    #[serde(rename = "tipoInquilino")]
    pub tenant_type: TenantType,
    #[serde(rename = "edadPreferida")]
    pub preferred_age: AgeRange,
    #[serde(rename = "generoPreferido")]
    pub preferred_gender: GenderPreference,
    #[serde(rename = "fumador")]
    pub smoker: SmokerPolicy,
    #[serde(rename = "mascotasPermitidas")]
    pub pets_allowed: YesNo,
}

/// Preferred lease length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractDuration {
    #[serde(rename = "6_meses")]
    SixMonths,
    #[serde(rename = "1_año")]
    OneYear,
    #[serde(rename = "2_años")]
    TwoYears,
    #[serde(rename = "mas_2_años")]
    MoreThanTwoYears,
}

impl ContractDuration {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "6_meses" => Some(Self::SixMonths),
            "1_año" => Some(Self::OneYear),
            "2_años" => Some(Self::TwoYears),
            "mas_2_años" => Some(Self::MoreThanTwoYears),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SixMonths => "6_meses",
            Self::OneYear => "1_año",
            Self::TwoYears => "2_años",
            Self::MoreThanTwoYears => "mas_2_años",
        }
    }
}

/// A yes/no answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "si")]
    Si,
    #[serde(rename = "no")]
    No,
}

impl YesNo {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "si" => Some(Self::Si),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Si => "si",
            Self::No => "no",
        }
    }
}

/// Preferred tenant classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantType {
    Estudiante,
    Profesional,
    Familia,
}

impl TenantType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "estudiante" => Some(Self::Estudiante),
            "profesional" => Some(Self::Profesional),
            "familia" => Some(Self::Familia),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Estudiante => "estudiante",
            Self::Profesional => "profesional",
            Self::Familia => "familia",
        }
    }
}

/// Preferred tenant age bracket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "18-25")]
    From18To25,
    #[serde(rename = "26-35")]
    From26To35,
    #[serde(rename = "36-50")]
    From36To50,
    #[serde(rename = "50+")]
    Over50,
}

impl AgeRange {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "18-25" => Some(Self::From18To25),
            "26-35" => Some(Self::From26To35),
            "36-50" => Some(Self::From36To50),
            "50+" => Some(Self::Over50),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::From18To25 => "18-25",
            Self::From26To35 => "26-35",
            Self::From36To50 => "36-50",
            Self::Over50 => "50+",
        }
    }
}

/// Preferred tenant gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPreference {
    Masculino,
    Femenino,
    Indiferente,
}

impl GenderPreference {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "masculino" => Some(Self::Masculino),
            "femenino" => Some(Self::Femenino),
            "indiferente" => Some(Self::Indiferente),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Masculino => "masculino",
            Self::Femenino => "femenino",
            Self::Indiferente => "indiferente",
        }
    }
}

/// Smoker tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokerPolicy {
    Si,
    No,
    Indiferente,
}

impl SmokerPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "si" => Some(Self::Si),
            "no" => Some(Self::No),
            "indiferente" => Some(Self::Indiferente),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Si => "si",
            Self::No => "no",
            Self::Indiferente => "indiferente",
        }
    }
}
