//! Property-based tests for the record store
//!
//! Uses proptest to generate random collections and verify that listing is
//! ordered and that create/update/delete are reflected by the next list.

use chrono::NaiveDate;
use proptest::prelude::*;

use customer_desk::shared::{CustomerError, CustomerFields, MemoryCustomerStore, RecordStore};

fn fields_strategy() -> impl Strategy<Value = CustomerFields> {
    (
        "[A-Za-z][A-Za-z ]{0,15}",
        0i32..3650,
        -1.0e6f64..1.0e6,
        "[a-z]{1,12}",
    )
        .prop_map(|(name, offset, member, interest)| CustomerFields {
            name: Some(name),
            date: NaiveDate::from_ymd_opt(2000, 1, 1)
                .and_then(|d| d.checked_add_signed(chrono::Duration::days(offset as i64))),
            member: Some(member),
            interest: Some(interest),
        })
}

proptest! {
    #[test]
    fn test_create_then_list_is_sorted_and_contains_one_match(
        existing in prop::collection::vec(fields_strategy(), 0..8),
        new in fields_strategy(),
    ) {
        tokio_test::block_on(async {
            let store = MemoryCustomerStore::new();
            for fields in existing {
                store.create(fields).await.unwrap();
            }

            let draft = new.clone().require().unwrap();
            let created = store.create(new).await.unwrap();
            let listed = store.list_all().await.unwrap();

            let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
            prop_assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
            prop_assert_eq!(listed.iter().filter(|c| c.id == created.id).count(), 1);
            prop_assert!(created.matches(&draft));
            Ok(())
        })?;
    }

    #[test]
    fn test_update_keeps_id_and_applies_fields(
        original in fields_strategy(),
        change in fields_strategy(),
    ) {
        tokio_test::block_on(async {
            let store = MemoryCustomerStore::new();
            let created = store.create(original).await.unwrap();

            let updated = store.update_by_id(&created.id, change.clone()).await.unwrap();
            let listed = store.list_all().await.unwrap();

            prop_assert_eq!(&updated.id, &created.id);
            prop_assert!(updated.matches(&change.require().unwrap()));
            prop_assert_eq!(listed, vec![updated]);
            Ok(())
        })?;
    }

    #[test]
    fn test_delete_removes_exactly_one(
        records in prop::collection::vec(fields_strategy(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        tokio_test::block_on(async {
            let store = MemoryCustomerStore::new();
            for fields in records {
                store.create(fields).await.unwrap();
            }
            let before = store.list_all().await.unwrap();
            let victim = before[pick.index(before.len())].id.clone();

            store.delete_by_id(&victim).await.unwrap();
            let after = store.list_all().await.unwrap();

            prop_assert_eq!(after.len(), before.len() - 1);
            prop_assert!(after.iter().all(|c| c.id != victim));
            let again = store.delete_by_id(&victim).await;
            let not_found = matches!(again, Err(CustomerError::NotFoundError { .. }));
            prop_assert!(not_found, "second delete of {} did not report not found", victim);
            Ok(())
        })?;
    }
}
