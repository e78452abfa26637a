//! Permission Assembler
//!
//! Transforms an authenticated user's resolved roles into the nested
//! visibility structure the client uses to build navigation:
//! one top-level entry per role, each holding the modules/options that
//! role can see. Entries are never merged across roles; the client
//! consumes the per-role structure as delivered.

use std::collections::HashSet;

use shared::models::{MenuOption, Module, Role};
use shared::permission::{ModuleGrant, Permission};

use crate::utils::{AppError, AppResult};

/// Assemble the permission tree for a set of roles.
///
/// For each role: select every option whose role set contains that role,
/// group the selection by owning module, and sort by module order then
/// option order (stable, ties broken by insertion order). A role with no
/// matching options still produces an entry with an empty module list.
/// Duplicate role ids in the input collapse to a single entry.
///
/// Inactive entities are NOT filtered here; visibility of inactive
/// records is left to the consuming UI.
pub fn assemble(
    roles: &[Role],
    modules: &[Module],
    options: &[MenuOption],
) -> AppResult<Vec<Permission>> {
    let mut seen = HashSet::new();
    let mut tree = Vec::with_capacity(roles.len());

    let mut ordered_modules: Vec<&Module> = modules.iter().collect();
    ordered_modules.sort_by_key(|m| m.order);

    for role in roles {
        if !seen.insert(role.id.clone()) {
            continue;
        }

        let visible: Vec<&MenuOption> = options
            .iter()
            .filter(|o| o.role_ids.iter().any(|r| r == &role.id))
            .collect();

        // An option whose module no longer resolves fails the whole
        // assembly; deletes do not cascade, so this can happen.
        if let Some(orphan) = visible
            .iter()
            .find(|o| !modules.iter().any(|m| m.id == o.module_id))
        {
            return Err(AppError::not_found(format!(
                "Module {} not found",
                orphan.module_id
            )));
        }

        let mut grants = Vec::new();
        for module in &ordered_modules {
            let mut owned: Vec<&MenuOption> = visible
                .iter()
                .copied()
                .filter(|o| o.module_id == module.id)
                .collect();
            if owned.is_empty() {
                continue;
            }
            owned.sort_by_key(|o| o.order);
            grants.push(ModuleGrant {
                module: (*module).into(),
                options: owned.into_iter().map(Into::into).collect(),
            });
        }

        tree.push(Permission {
            role: role.into(),
            modules: grants,
        });
    }

    Ok(tree)
}
