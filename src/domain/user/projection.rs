//! Info reconciliation
//!
//! Merges a user's stored info values against the ordered catalog of info
//! items into a display-ready projection: exactly one row per catalog item,
//! in catalog order, carrying the user's value where one exists.

use std::collections::HashMap;

use super::model::{InfoItem, ProjectedUserInfo, User, UserProjection};

/// Reconcile a user's stored info values against the full catalog.
///
/// Output cardinality always equals catalog cardinality. Rows keep the
/// catalog's order; `id` and `value` are `None` where the user has no
/// stored value for the item. Pure and infallible.
pub fn reconcile_user_info(user: &User, catalog: &[InfoItem]) -> Vec<ProjectedUserInfo> {
    // A user with no stored values at all gets every row forced absent.
    // Kept as an explicit guard so the per-item lookup can change without
    // silently dropping this case.
    if user.infos.is_empty() {
        return catalog.iter().map(|item| absent_row(item)).collect();
    }

    // Index stored values by info-item id. On malformed duplicates the
    // first loaded value wins; no dedup, no error.
    let mut by_item = HashMap::with_capacity(user.infos.len());
    for info in &user.infos {
        by_item.entry(info.info_item_id).or_insert(info);
    }

    catalog
        .iter()
        .map(|item| match by_item.get(&item.id) {
            Some(info) => ProjectedUserInfo {
                id: Some(info.id),
                value: Some(info.value.clone()),
                ..absent_row(item)
            },
            None => absent_row(item),
        })
        .collect()
}

/// Build the full display projection for a user.
pub fn project_user(user: &User, catalog: &[InfoItem]) -> UserProjection {
    UserProjection {
        user_id: user.id,
        username: user.username.clone(),
        mobile: user.mobile.clone(),
        banned: user.banned,
        recycled: user.recycled,
        created_at: user.created_at,
        updated_at: user.updated_at,
        roles: user.roles.clone(),
        infos: reconcile_user_info(user, catalog),
    }
}

fn absent_row(item: &InfoItem) -> ProjectedUserInfo {
    ProjectedUserInfo {
        id: None,
        order: item.order,
        relation_id: item.id,
        item_type: item.item_type.clone(),
        name: item.name.clone(),
        value: None,
        description: item.description.clone(),
        register_display: item.register_display,
        information_display: item.information_display,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::user::model::UserInfoValue;

    fn item(id: i32, order: i32, name: &str) -> InfoItem {
        InfoItem {
            id,
            order,
            item_type: "text".to_string(),
            name: name.to_string(),
            description: String::new(),
            register_display: true,
            information_display: true,
        }
    }

    fn user_with(infos: Vec<UserInfoValue>) -> User {
        let now = Utc::now();
        User {
            id: 7,
            username: "alice".to_string(),
            mobile: None,
            email: None,
            password_hash: String::new(),
            banned: false,
            recycled: false,
            created_at: now,
            updated_at: now,
            last_login_at: None,
            roles: vec![],
            infos,
        }
    }

    #[test]
    fn output_cardinality_equals_catalog_cardinality() {
        let catalog = vec![item(1, 1, "mobile"), item(2, 2, "email"), item(3, 3, "bio")];
        let user = user_with(vec![UserInfoValue {
            id: 10,
            info_item_id: 2,
            value: "a@b.com".to_string(),
        }]);

        assert_eq!(reconcile_user_info(&user, &catalog).len(), catalog.len());
        assert_eq!(reconcile_user_info(&user, &[]).len(), 0);
    }

    #[test]
    fn empty_stored_values_force_every_row_absent() {
        let catalog = vec![item(1, 1, "mobile"), item(2, 2, "email")];
        let rows = reconcile_user_info(&user_with(vec![]), &catalog);

        assert_eq!(rows.len(), 2);
        for row in rows {
            assert_eq!(row.id, None);
            assert_eq!(row.value, None);
        }
    }

    #[test]
    fn single_match_fills_only_its_row() {
        let catalog = vec![item(1, 1, "mobile"), item(2, 2, "email")];
        let user = user_with(vec![UserInfoValue {
            id: 99,
            info_item_id: 2,
            value: "a@b.com".to_string(),
        }]);

        let rows = reconcile_user_info(&user, &catalog);
        assert_eq!(rows[0].relation_id, 1);
        assert_eq!(rows[0].id, None);
        assert_eq!(rows[0].value, None);
        assert_eq!(rows[1].relation_id, 2);
        assert_eq!(rows[1].id, Some(99));
        assert_eq!(rows[1].value.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn output_order_follows_catalog_not_stored_values() {
        let catalog = vec![item(5, 1, "first"), item(3, 2, "second"), item(9, 3, "third")];
        // Stored values loaded in reverse catalog order
        let user = user_with(vec![
            UserInfoValue {
                id: 1,
                info_item_id: 9,
                value: "c".to_string(),
            },
            UserInfoValue {
                id: 2,
                info_item_id: 3,
                value: "b".to_string(),
            },
            UserInfoValue {
                id: 3,
                info_item_id: 5,
                value: "a".to_string(),
            },
        ]);

        let rows = reconcile_user_info(&user, &catalog);
        let relation_ids: Vec<i32> = rows.iter().map(|r| r.relation_id).collect();
        assert_eq!(relation_ids, vec![5, 3, 9]);
        let values: Vec<&str> = rows.iter().filter_map(|r| r.value.as_deref()).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn reconcile_is_idempotent() {
        let catalog = vec![item(1, 1, "mobile"), item(2, 2, "email")];
        let user = user_with(vec![UserInfoValue {
            id: 4,
            info_item_id: 1,
            value: "555".to_string(),
        }]);

        assert_eq!(
            reconcile_user_info(&user, &catalog),
            reconcile_user_info(&user, &catalog)
        );
    }

    #[test]
    fn duplicate_values_for_one_item_take_first_loaded() {
        let catalog = vec![item(1, 1, "mobile")];
        let user = user_with(vec![
            UserInfoValue {
                id: 11,
                info_item_id: 1,
                value: "first".to_string(),
            },
            UserInfoValue {
                id: 12,
                info_item_id: 1,
                value: "second".to_string(),
            },
        ]);

        let rows = reconcile_user_info(&user, &catalog);
        assert_eq!(rows[0].id, Some(11));
        assert_eq!(rows[0].value.as_deref(), Some("first"));
    }

    #[test]
    fn unmatched_item_absent_while_others_match() {
        let catalog = vec![item(1, 1, "mobile"), item(2, 2, "email"), item(3, 3, "bio")];
        let user = user_with(vec![
            UserInfoValue {
                id: 20,
                info_item_id: 1,
                value: "555".to_string(),
            },
            UserInfoValue {
                id: 21,
                info_item_id: 3,
                value: "hi".to_string(),
            },
        ]);

        let rows = reconcile_user_info(&user, &catalog);
        assert_eq!(rows[1].relation_id, 2);
        assert_eq!(rows[1].id, None);
        assert_eq!(rows[1].value, None);
        assert_eq!(rows[0].id, Some(20));
        assert_eq!(rows[2].id, Some(21));
    }

    #[test]
    fn projection_carries_identity_and_status_fields() {
        let catalog = vec![item(1, 1, "mobile")];
        let user = user_with(vec![]);
        let projection = project_user(&user, &catalog);

        assert_eq!(projection.user_id, user.id);
        assert_eq!(projection.username, user.username);
        assert!(!projection.banned);
        assert!(!projection.recycled);
        assert_eq!(projection.infos.len(), 1);
    }
}
