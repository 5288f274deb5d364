use super::*;
use crate::state::toasts::ToastVariant;

// =============================================================
// Per-option in-flight flags
// =============================================================

#[test]
fn flags_start_idle_for_both_roles() {
    let flags = RoleAssignFlags::default();
    assert!(!flags.is_assigning(Role::Tenant));
    assert!(!flags.is_assigning(Role::Landlord));
}

#[test]
fn assigning_one_role_leaves_the_other_idle() {
    let mut flags = RoleAssignFlags::default();
    flags.set(Role::Tenant, true);
    assert!(flags.is_assigning(Role::Tenant));
    assert!(!flags.is_assigning(Role::Landlord));
}

#[test]
fn flags_return_to_idle_after_settlement() {
    let mut flags = RoleAssignFlags::default();
    flags.set(Role::Tenant, true);
    flags.set(Role::Tenant, false);
    assert!(!flags.is_assigning(Role::Tenant));
}

#[test]
fn both_flags_are_independent() {
    let mut flags = RoleAssignFlags::default();
    flags.set(Role::Tenant, true);
    flags.set(Role::Landlord, true);
    assert!(flags.is_assigning(Role::Tenant));
    assert!(flags.is_assigning(Role::Landlord));
}

// =============================================================
// Outcome notifications
// =============================================================

#[test]
fn success_toast_names_the_assigned_role() {
    let toast = assignment_success_toast(Role::Tenant);
    assert_eq!(toast.title, "Rol asignado con éxito");
    assert_eq!(toast.description, "Has sido registrado como Inquilino.");
    assert_eq!(toast.variant, ToastVariant::Default);

    let toast = assignment_success_toast(Role::Landlord);
    assert_eq!(toast.description, "Has sido registrado como Arrendatario.");
}

#[test]
fn failure_toast_is_destructive_and_generic() {
    let toast = assignment_failure_toast();
    assert_eq!(toast.title, "Error al asignar el rol");
    assert_eq!(toast.description, "Por favor, inténtalo de nuevo más tarde.");
    assert_eq!(toast.variant, ToastVariant::Destructive);
}
