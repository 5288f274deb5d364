//! Role-specific preference form for the profile-creation flow.
//!
//! DESIGN
//! ======
//! The role tag selects one of two field sets; each fieldset owns its own
//! signals and validates into a typed payload on submit. Raw input strings
//! stop at the validation boundary — the `on_next` continuation only ever
//! receives a fully parsed `PreferencePayload`. The component persists
//! nothing itself.

#[cfg(test)]
#[path = "preferences_form_test.rs"]
mod preferences_form_test;

use leptos::prelude::*;

use crate::net::types::{
    AgeRange, ContractDuration, GenderPreference, LandlordPreferences, PreferencePayload, Role,
    SmokerPolicy, TenantPreferences, TenantType, YesNo,
};

/// A failed field with its inline message. Field names use the wire keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Raw tenant-side form input before validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TenantDraft {
    pub location: String,
    pub budget: String,
    pub rooms: String,
    pub min_area: String,
    pub contract_duration: String,
    pub pets: String,
}

/// Raw landlord-side form input before validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandlordDraft {
    pub tenant_type: String,
    pub preferred_age: String,
    pub preferred_gender: String,
    pub smoker: String,
    pub pets_allowed: String,
}

/// Validate a tenant draft into a typed payload.
///
/// # Errors
///
/// Returns every failed field with its message; submission is blocked
/// until the list is empty.
pub fn validate_tenant(draft: &TenantDraft) -> Result<TenantPreferences, Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.location.trim().is_empty() {
        errors.push(FieldError { field: "ubicacion", message: "La ubicación es requerida" });
    }
    if draft.budget.trim().is_empty() {
        errors.push(FieldError { field: "presupuesto", message: "El presupuesto es requerido" });
    }
    if draft.rooms.trim().is_empty() {
        errors.push(FieldError {
            field: "habitaciones",
            message: "El número de habitaciones es requerido",
        });
    }
    if draft.min_area.trim().is_empty() {
        errors.push(FieldError { field: "areaCuadrada", message: "El área cuadrada es requerida" });
    }
    let contract_duration = ContractDuration::parse(&draft.contract_duration);
    if contract_duration.is_none() {
        errors.push(FieldError {
            field: "duracionContrato",
            message: "Selecciona la duración del contrato",
        });
    }
    let pets = YesNo::parse(&draft.pets);
    if pets.is_none() {
        errors.push(FieldError { field: "mascotas", message: "Indica si tienes mascotas" });
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    // Both parses succeeded above.
    let (Some(contract_duration), Some(pets)) = (contract_duration, pets) else {
        return Err(errors);
    };
    Ok(TenantPreferences {
        location: draft.location.trim().to_owned(),
        budget: draft.budget.trim().to_owned(),
        rooms: draft.rooms.trim().to_owned(),
        min_area: draft.min_area.trim().to_owned(),
        contract_duration,
        pets,
    })
}

/// Validate a landlord draft into a typed payload.
///
/// # Errors
///
/// Returns every failed field with its message; submission is blocked
/// until the list is empty.
pub fn validate_landlord(draft: &LandlordDraft) -> Result<LandlordPreferences, Vec<FieldError>> {
    let mut errors = Vec::new();

    let tenant_type = TenantType::parse(&draft.tenant_type);
    if tenant_type.is_none() {
        errors.push(FieldError {
            field: "tipoInquilino",
            message: "Selecciona el tipo de inquilino",
        });
    }
    let preferred_age = AgeRange::parse(&draft.preferred_age);
    if preferred_age.is_none() {
        errors.push(FieldError { field: "edadPreferida", message: "Selecciona el rango de edad" });
    }
    let preferred_gender = GenderPreference::parse(&draft.preferred_gender);
    if preferred_gender.is_none() {
        errors.push(FieldError {
            field: "generoPreferido",
            message: "Selecciona el género preferido",
        });
    }
    let smoker = SmokerPolicy::parse(&draft.smoker);
    if smoker.is_none() {
        errors.push(FieldError { field: "fumador", message: "Selecciona una opción" });
    }
    let pets_allowed = YesNo::parse(&draft.pets_allowed);
    if pets_allowed.is_none() {
        errors.push(FieldError {
            field: "mascotasPermitidas",
            message: "Indica si permites mascotas",
        });
    }

    let (Some(tenant_type), Some(preferred_age), Some(preferred_gender), Some(smoker), Some(pets_allowed)) =
        (tenant_type, preferred_age, preferred_gender, smoker, pets_allowed)
    else {
        return Err(errors);
    };
    Ok(LandlordPreferences {
        tenant_type,
        preferred_age,
        preferred_gender,
        smoker,
        pets_allowed,
    })
}

/// Message for a field, if it failed the last validation pass.
pub(crate) fn field_message(errors: &[FieldError], field: &str) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

/// Preference form for the active role.
///
/// Hands a validated payload to `on_next`; `on_back` returns control to
/// the caller without touching the entered data.
#[component]
pub fn PreferencesForm(
    role: Role,
    #[prop(optional_no_strip)] initial: Option<PreferencePayload>,
    on_next: Callback<PreferencePayload>,
    on_back: Callback<()>,
) -> impl IntoView {
    let (title, subtitle) = match role {
        Role::Tenant => (
            "Preferencias de Vivienda",
            "Indícanos tus preferencias para encontrar la vivienda ideal.",
        ),
        Role::Landlord => (
            "Preferencias de Inquilinos",
            "Indícanos tus preferencias sobre los inquilinos.",
        ),
    };

    view! {
        <div class="preferences-form">
            <div class="preferences-form__header">
                <h2 class="preferences-form__title">{title}</h2>
                <p class="preferences-form__subtitle">{subtitle}</p>
            </div>
            {match role {
                Role::Tenant => {
                    let initial = match initial {
                        Some(PreferencePayload::Tenant(p)) => Some(p),
                        _ => None,
                    };
                    view! { <TenantFieldset initial=initial on_next=on_next on_back=on_back/> }
                        .into_any()
                }
                Role::Landlord => {
                    let initial = match initial {
                        Some(PreferencePayload::Landlord(p)) => Some(p),
                        _ => None,
                    };
                    view! { <LandlordFieldset initial=initial on_next=on_next on_back=on_back/> }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn TenantFieldset(
    #[prop(optional_no_strip)] initial: Option<TenantPreferences>,
    on_next: Callback<PreferencePayload>,
    on_back: Callback<()>,
) -> impl IntoView {
    let location = RwSignal::new(initial.as_ref().map(|p| p.location.clone()).unwrap_or_default());
    let budget = RwSignal::new(initial.as_ref().map(|p| p.budget.clone()).unwrap_or_default());
    let rooms = RwSignal::new(initial.as_ref().map(|p| p.rooms.clone()).unwrap_or_default());
    let min_area = RwSignal::new(initial.as_ref().map(|p| p.min_area.clone()).unwrap_or_default());
    let contract_duration = RwSignal::new(
        initial
            .as_ref()
            .map(|p| p.contract_duration.as_str().to_owned())
            .unwrap_or_default(),
    );
    let pets = RwSignal::new(
        initial.as_ref().map(|p| p.pets.as_str().to_owned()).unwrap_or_default(),
    );
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = TenantDraft {
            location: location.get(),
            budget: budget.get(),
            rooms: rooms.get(),
            min_area: min_area.get(),
            contract_duration: contract_duration.get(),
            pets: pets.get(),
        };
        match validate_tenant(&draft) {
            Ok(prefs) => {
                errors.set(Vec::new());
                on_next.run(PreferencePayload::Tenant(prefs));
            }
            Err(failed) => errors.set(failed),
        }
    };

    view! {
        <form class="preferences-form__fields" on:submit=on_submit>
            <label class="form-field">
                "Ubicación Preferida"
                <input
                    class="form-field__input"
                    type="text"
                    placeholder="Madrid Centro"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                {move || field_message(&errors.get(), "ubicacion").map(|msg| view! {
                    <p class="form-field__error">{msg}</p>
                })}
            </label>

            <div class="preferences-form__row">
                <label class="form-field">
                    "Presupuesto Mensual (€)"
                    <input
                        class="form-field__input"
                        type="number"
                        placeholder="1000"
                        prop:value=move || budget.get()
                        on:input=move |ev| budget.set(event_target_value(&ev))
                    />
                    {move || field_message(&errors.get(), "presupuesto").map(|msg| view! {
                        <p class="form-field__error">{msg}</p>
                    })}
                </label>

                <label class="form-field">
                    "Número de Habitaciones"
                    <input
                        class="form-field__input"
                        type="number"
                        placeholder="2"
                        prop:value=move || rooms.get()
                        on:input=move |ev| rooms.set(event_target_value(&ev))
                    />
                    {move || field_message(&errors.get(), "habitaciones").map(|msg| view! {
                        <p class="form-field__error">{msg}</p>
                    })}
                </label>
            </div>

            <label class="form-field">
                "Área Cuadrada Mínima (m²)"
                <input
                    class="form-field__input"
                    type="number"
                    placeholder="60"
                    prop:value=move || min_area.get()
                    on:input=move |ev| min_area.set(event_target_value(&ev))
                />
                {move || field_message(&errors.get(), "areaCuadrada").map(|msg| view! {
                    <p class="form-field__error">{msg}</p>
                })}
            </label>

            <label class="form-field">
                "Duración del Contrato Preferida"
                <select
                    class="form-field__select"
                    prop:value=move || contract_duration.get()
                    on:change=move |ev| contract_duration.set(event_target_value(&ev))
                >
                    <option value="" disabled>"Selecciona la duración del contrato"</option>
                    <option value="6_meses">"6 meses"</option>
                    <option value="1_año">"1 año"</option>
                    <option value="2_años">"2 años"</option>
                    <option value="mas_2_años">"Más de 2 años"</option>
                </select>
                {move || field_message(&errors.get(), "duracionContrato").map(|msg| view! {
                    <p class="form-field__error">{msg}</p>
                })}
            </label>

            <fieldset class="form-field form-field--radio">
                <legend>"¿Tienes Mascotas?"</legend>
                <label class="form-field__option">
                    <input
                        type="radio"
                        name="mascotas"
                        value="si"
                        prop:checked=move || pets.get() == "si"
                        on:change=move |ev| pets.set(event_target_value(&ev))
                    />
                    "Sí"
                </label>
                <label class="form-field__option">
                    <input
                        type="radio"
                        name="mascotas"
                        value="no"
                        prop:checked=move || pets.get() == "no"
                        on:change=move |ev| pets.set(event_target_value(&ev))
                    />
                    "No"
                </label>
                {move || field_message(&errors.get(), "mascotas").map(|msg| view! {
                    <p class="form-field__error">{msg}</p>
                })}
            </fieldset>

            <div class="preferences-form__actions">
                <button class="btn" type="button" on:click=move |_| on_back.run(())>
                    "Atrás"
                </button>
                <button class="btn btn--primary" type="submit">
                    "Siguiente"
                </button>
            </div>
        </form>
    }
}

#[component]
fn LandlordFieldset(
    #[prop(optional_no_strip)] initial: Option<LandlordPreferences>,
    on_next: Callback<PreferencePayload>,
    on_back: Callback<()>,
) -> impl IntoView {
    let tenant_type = RwSignal::new(
        initial.as_ref().map(|p| p.tenant_type.as_str().to_owned()).unwrap_or_default(),
    );
    let preferred_age = RwSignal::new(
        initial.as_ref().map(|p| p.preferred_age.as_str().to_owned()).unwrap_or_default(),
    );
    let preferred_gender = RwSignal::new(
        initial
            .as_ref()
            .map(|p| p.preferred_gender.as_str().to_owned())
            .unwrap_or_default(),
    );
    let smoker = RwSignal::new(
        initial.as_ref().map(|p| p.smoker.as_str().to_owned()).unwrap_or_default(),
    );
    let pets_allowed = RwSignal::new(
        initial.as_ref().map(|p| p.pets_allowed.as_str().to_owned()).unwrap_or_default(),
    );
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = LandlordDraft {
            tenant_type: tenant_type.get(),
            preferred_age: preferred_age.get(),
            preferred_gender: preferred_gender.get(),
            smoker: smoker.get(),
            pets_allowed: pets_allowed.get(),
        };
        match validate_landlord(&draft) {
            Ok(prefs) => {
                errors.set(Vec::new());
                on_next.run(PreferencePayload::Landlord(prefs));
            }
            Err(failed) => errors.set(failed),
        }
    };

    view! {
        <form class="preferences-form__fields" on:submit=on_submit>
            <label class="form-field">
                "Tipo de Inquilino Preferido"
                <select
                    class="form-field__select"
                    prop:value=move || tenant_type.get()
                    on:change=move |ev| tenant_type.set(event_target_value(&ev))
                >
                    <option value="" disabled>"Selecciona el tipo de inquilino"</option>
                    <option value="estudiante">"Estudiante"</option>
                    <option value="profesional">"Profesional"</option>
                    <option value="familia">"Familia"</option>
                </select>
                {move || field_message(&errors.get(), "tipoInquilino").map(|msg| view! {
                    <p class="form-field__error">{msg}</p>
                })}
            </label>

            <label class="form-field">
                "Rango de Edad Preferido"
                <select
                    class="form-field__select"
                    prop:value=move || preferred_age.get()
                    on:change=move |ev| preferred_age.set(event_target_value(&ev))
                >
                    <option value="" disabled>"Selecciona el rango de edad"</option>
                    <option value="18-25">"18-25 años"</option>
                    <option value="26-35">"26-35 años"</option>
                    <option value="36-50">"36-50 años"</option>
                    <option value="50+">"Más de 50 años"</option>
                </select>
                {move || field_message(&errors.get(), "edadPreferida").map(|msg| view! {
                    <p class="form-field__error">{msg}</p>
                })}
            </label>

            <label class="form-field">
                "Género Preferido"
                <select
                    class="form-field__select"
                    prop:value=move || preferred_gender.get()
                    on:change=move |ev| preferred_gender.set(event_target_value(&ev))
                >
                    <option value="" disabled>"Selecciona el género preferido"</option>
                    <option value="masculino">"Masculino"</option>
                    <option value="femenino">"Femenino"</option>
                    <option value="indiferente">"Indiferente"</option>
                </select>
                {move || field_message(&errors.get(), "generoPreferido").map(|msg| view! {
                    <p class="form-field__error">{msg}</p>
                })}
            </label>

            <label class="form-field">
                "¿Acepta fumadores?"
                <select
                    class="form-field__select"
                    prop:value=move || smoker.get()
                    on:change=move |ev| smoker.set(event_target_value(&ev))
                >
                    <option value="" disabled>"Selecciona una opción"</option>
                    <option value="si">"Sí"</option>
                    <option value="no">"No"</option>
                    <option value="indiferente">"Indiferente"</option>
                </select>
                {move || field_message(&errors.get(), "fumador").map(|msg| view! {
                    <p class="form-field__error">{msg}</p>
                })}
            </label>

            <fieldset class="form-field form-field--radio">
                <legend>"¿Permite mascotas?"</legend>
                <label class="form-field__option">
                    <input
                        type="radio"
                        name="mascotasPermitidas"
                        value="si"
                        prop:checked=move || pets_allowed.get() == "si"
                        on:change=move |ev| pets_allowed.set(event_target_value(&ev))
                    />
                    "Sí"
                </label>
                <label class="form-field__option">
                    <input
                        type="radio"
                        name="mascotasPermitidas"
                        value="no"
                        prop:checked=move || pets_allowed.get() == "no"
                        on:change=move |ev| pets_allowed.set(event_target_value(&ev))
                    />
                    "No"
                </label>
                {move || field_message(&errors.get(), "mascotasPermitidas").map(|msg| view! {
                    <p class="form-field__error">{msg}</p>
                })}
            </fieldset>

            <div class="preferences-form__actions">
                <button class="btn" type="button" on:click=move |_| on_back.run(())>
                    "Atrás"
                </button>
                <button class="btn btn--primary" type="submit">
                    "Siguiente"
                </button>
            </div>
        </form>
    }
}
