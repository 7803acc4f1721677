//! Type definitions

mod config;
mod form;
mod response;

pub use config::{
    ApiKeyInstructions, Branding, ConsentConfig, ConsentConfigPatch, CustomStyles,
    InstructionStep, RegionOption, ShadowIntensity, Theme, ThemeMode,
};
pub use form::{ConsentFormData, FieldErrors, FormStatus};
pub use response::{
    AuthorizeRequest, AuthorizeResponse, ConfigDefaults, ConsentConfigResponse, IssuedToken,
    Permission,
};
