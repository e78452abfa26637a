//! Demo data seed
//!
//! Populates the in-memory store with the demo data set the panel ships
//! with: two modules, three roles, three options and one administrator
//! account. Runs once at startup.

use chrono::Utc;

use shared::models::{MenuOption, Module, Person, Role, User};

use crate::db::MemoryDb;

pub fn seed(db: &MemoryDb) {
    let now = Utc::now();

    {
        let mut modules = db.modules().write();
        modules.push(Module {
            id: "module-dashboard".into(),
            name: "Dashboard".into(),
            description: "Panel de control principal".into(),
            icon: "fas fa-tachometer-alt".into(),
            order: 1,
            is_active: true,
            created_at: now,
            updated_at: now,
        });
        modules.push(Module {
            id: "module-solicitudes".into(),
            name: "Solicitudes".into(),
            description: "Gestión de solicitudes financieras".into(),
            icon: "fas fa-file-invoice-dollar".into(),
            order: 2,
            is_active: true,
            created_at: now,
            updated_at: now,
        });
    }

    {
        let mut roles = db.roles().write();
        roles.push(Role {
            id: "role-admin".into(),
            name: "Administrador".into(),
            icon: "fas fa-user-shield".into(),
            description: "Acceso completo al sistema".into(),
            is_active: true,
            created_at: now,
            updated_at: now,
        });
        roles.push(Role {
            id: "role-tesorero".into(),
            name: "Tesorero".into(),
            icon: "fas fa-wallet".into(),
            description: "Gestión de finanzas".into(),
            is_active: true,
            created_at: now,
            updated_at: now,
        });
        roles.push(Role {
            id: "role-pastor".into(),
            name: "Pastor General".into(),
            icon: "fas fa-cross".into(),
            description: "Líder principal de la organización".into(),
            is_active: true,
            created_at: now,
            updated_at: now,
        });
    }

    {
        let mut options = db.options().write();
        options.push(MenuOption {
            id: "option-dashboard".into(),
            name: "Ver Dashboard".into(),
            route: "/dashboard".into(),
            icon: "fas fa-chart-line".into(),
            order: 1,
            module_id: "module-dashboard".into(),
            role_ids: vec!["role-admin".into(), "role-tesorero".into()],
            is_active: true,
            created_at: now,
            updated_at: now,
        });
        options.push(MenuOption {
            id: "option-crear-solicitud".into(),
            name: "Crear Solicitud".into(),
            route: "/solicitudes/crear".into(),
            icon: "fas fa-plus".into(),
            order: 1,
            module_id: "module-solicitudes".into(),
            role_ids: vec!["role-tesorero".into()],
            is_active: true,
            created_at: now,
            updated_at: now,
        });
        options.push(MenuOption {
            id: "option-ver-solicitudes".into(),
            name: "Ver Solicitudes".into(),
            route: "/solicitudes".into(),
            icon: "fas fa-list".into(),
            order: 2,
            module_id: "module-solicitudes".into(),
            role_ids: vec!["role-admin".into(), "role-tesorero".into()],
            is_active: true,
            created_at: now,
            updated_at: now,
        });
    }

    {
        let mut users = db.users().write();
        users.push(User {
            id: "user-admin".into(),
            username: "admin".into(),
            email: "admin@example.com".into(),
            password: "admin123".into(),
            person: Person {
                id: "person-admin".into(),
                first_names: "Juan".into(),
                last_names: "García".into(),
                document_type: "DNI".into(),
                document_number: "12345678".into(),
                birth_date: "1990-01-01".into(),
                phone: "123456789".into(),
                address: "Calle 1".into(),
                is_active: true,
                created_at: now,
                updated_at: now,
                full_name: "Juan García".into(),
            },
            role_ids: vec!["role-admin".into()],
            failed_attempts: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
            last_access: now,
        });
    }

    tracing::info!("Seeded demo data (2 modules, 3 roles, 3 options, 1 user)");
}
