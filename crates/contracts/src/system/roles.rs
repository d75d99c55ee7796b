use serde::{Deserialize, Serialize};

/// Role labels assignable to a user. Mutation affordances on every
/// entity page are gated on the intersection of the session's roles
/// with the page's permitted set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    ProductionManager,
    ProductionStaff,
    WarehouseStaff,
    SalesStaff,
    PurchaseManager,
    QualityInspector,
    MaintenanceStaff,
    FinanceManager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::ProductionManager => "production_manager",
            Role::ProductionStaff => "production_staff",
            Role::WarehouseStaff => "warehouse_staff",
            Role::SalesStaff => "sales_staff",
            Role::PurchaseManager => "purchase_manager",
            Role::QualityInspector => "quality_inspector",
            Role::MaintenanceStaff => "maintenance_staff",
            Role::FinanceManager => "finance_manager",
        }
    }

    /// Parse a role label coming from the `roles` table. Unknown labels
    /// yield `None` and are dropped rather than treated as errors, so a
    /// newly provisioned backend role degrades to "no extra access".
    pub fn parse(label: &str) -> Option<Role> {
        match label {
            "admin" => Some(Role::Admin),
            "production_manager" => Some(Role::ProductionManager),
            "production_staff" => Some(Role::ProductionStaff),
            "warehouse_staff" => Some(Role::WarehouseStaff),
            "sales_staff" => Some(Role::SalesStaff),
            "purchase_manager" => Some(Role::PurchaseManager),
            "quality_inspector" => Some(Role::QualityInspector),
            "maintenance_staff" => Some(Role::MaintenanceStaff),
            "finance_manager" => Some(Role::FinanceManager),
            _ => None,
        }
    }

    /// Display label for badges and the settings page.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::ProductionManager => "Production Manager",
            Role::ProductionStaff => "Production Staff",
            Role::WarehouseStaff => "Warehouse Staff",
            Role::SalesStaff => "Sales Staff",
            Role::PurchaseManager => "Purchase Manager",
            Role::QualityInspector => "Quality Inspector",
            Role::MaintenanceStaff => "Maintenance Staff",
            Role::FinanceManager => "Finance Manager",
        }
    }
}

/// Edit gate for one entity page.
///
/// `permitted == None` means the page is unrestricted. Otherwise the
/// session must hold at least one of the permitted roles; an empty
/// session set fails closed (roles may still be loading).
pub fn can_edit(session_roles: &[Role], permitted: Option<&[Role]>) -> bool {
    match permitted {
        None => true,
        Some(allowed) => session_roles.iter().any(|role| allowed.contains(role)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrestricted_pages_are_editable_by_anyone() {
        assert!(can_edit(&[], None));
        assert!(can_edit(&[Role::SalesStaff], None));
    }

    #[test]
    fn empty_session_fails_closed() {
        assert!(!can_edit(&[], Some(&[Role::Admin])));
    }

    #[test]
    fn requires_a_common_role() {
        let permitted = [Role::Admin, Role::ProductionManager];
        assert!(can_edit(&[Role::ProductionManager], Some(&permitted)));
        assert!(can_edit(
            &[Role::SalesStaff, Role::Admin],
            Some(&permitted)
        ));
        assert!(!can_edit(&[Role::SalesStaff], Some(&permitted)));
    }

    #[test]
    fn labels_round_trip() {
        for role in [
            Role::Admin,
            Role::ProductionManager,
            Role::ProductionStaff,
            Role::WarehouseStaff,
            Role::SalesStaff,
            Role::PurchaseManager,
            Role::QualityInspector,
            Role::MaintenanceStaff,
            Role::FinanceManager,
        ] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("shift_lead"), None);
    }
}
