use bill_app::{ApiError, AppError, AppState, BillView};
use bill_core::{BillEdit, BillInput, ComputedBill, Month, Rebate, ValidationError};
use tempfile::{TempDir, tempdir};

fn setup() -> (TempDir, AppState) {
    let dir = tempdir().expect("temp dir");
    let app_state = AppState::new(dir.path().join("bills.sqlite"));
    app_state.initialize().expect("initialize");
    (dir, app_state)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn quote_prices_without_saving() {
    let (_dir, app_state) = setup();
    let bills = &app_state.services.bills;

    let quote = bills
        .quote(&BillInput::new("January", "150", 0.0))
        .expect("quote");
    assert_close(quote.total_charge, 32.70);
    assert_close(quote.final_cost, 32.70);
    assert_eq!(quote.total_charge_display, "RM 32.70");
    assert_eq!(quote.rebate_display, "0%");
    assert_eq!(quote.breakdown.len(), 1);

    let quote = bills
        .quote(&BillInput::new("February", "250", 0.0))
        .expect("quote");
    assert_close(quote.total_charge, 60.30);

    let quote = bills
        .quote(&BillInput::new("March", "1000", 5.0))
        .expect("quote");
    assert_close(quote.total_charge, 395.60);
    assert_close(quote.final_cost, 375.82);
    assert_eq!(quote.final_cost_display, "RM 375.82");

    assert!(bills.list().expect("list").is_empty());
}

#[test]
fn compute_and_save_round_trips() {
    let (_dir, app_state) = setup();
    let bills = &app_state.services.bills;
    let input = BillInput::new("May", "420.5", 3.0);

    let computed = bills.compute(&input).expect("compute");
    let saved = bills.compute_and_save(&input).expect("save");
    let loaded = bills.get(saved.id).expect("get");

    assert_eq!(loaded, saved);
    assert_eq!(loaded.computed(), computed);
    assert_eq!(loaded.month, Month::May);
    assert_eq!(loaded.rebate, Rebate::Three);
}

#[test]
fn validation_blocks_persistence() {
    let (_dir, app_state) = setup();
    let bills = &app_state.services.bills;

    for input in [
        BillInput::new("", "100", 0.0),
        BillInput::new("May", "0", 0.0),
        BillInput::new("May", "1000.01", 0.0),
        BillInput::new("May", "lots", 0.0),
        BillInput::new("May", "100", 2.5),
    ] {
        let err = bills.compute_and_save(&input).expect_err("invalid input");
        assert!(matches!(err, AppError::Validation(_)), "{err:?}");
    }
    assert!(bills.list().expect("list").is_empty());

    let err = bills
        .quote(&BillInput::new(" ", "100", 0.0))
        .expect_err("empty month");
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::EmptyMonth)
    ));
}

#[test]
fn edit_rederives_charges_and_keeps_identity() {
    let (_dir, app_state) = setup();
    let bills = &app_state.services.bills;
    let saved = bills
        .compute_and_save(&BillInput::new("June", "150", 0.0))
        .expect("save");

    let edit = BillEdit {
        consumption: Some("1000".to_string()),
        rebate_percent: Some(5.0),
        ..BillEdit::default()
    };
    let updated = bills.edit_and_update(saved.id, &edit).expect("update");

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.created_at, saved.created_at);
    assert_eq!(updated.month, Month::June);
    assert_close(updated.total_charge, 395.60);
    assert_close(updated.final_cost, 375.82);
    assert_eq!(bills.get(saved.id).expect("reload"), updated);
}

#[test]
fn invalid_edit_leaves_record_untouched() {
    let (_dir, app_state) = setup();
    let bills = &app_state.services.bills;
    let saved = bills
        .compute_and_save(&BillInput::new("June", "150", 0.0))
        .expect("save");

    let edit = BillEdit {
        consumption: Some("2000".to_string()),
        ..BillEdit::default()
    };
    let err = bills.edit_and_update(saved.id, &edit).expect_err("rejected");
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(bills.get(saved.id).expect("reload"), saved);
}

#[test]
fn missing_bills_report_not_found() {
    let (_dir, app_state) = setup();
    let bills = &app_state.services.bills;

    assert!(matches!(bills.get(77), Err(AppError::NotFound(77))));
    let err = bills
        .edit_and_update(77, &BillEdit::default())
        .expect_err("missing");
    assert!(matches!(err, AppError::NotFound(77)));

    let api: ApiError = err.into();
    assert_eq!(api.status, 404);
    assert_eq!(api.code.as_deref(), Some("not_found"));
}

#[test]
fn delete_then_get_is_not_found() {
    let (_dir, app_state) = setup();
    let bills = &app_state.services.bills;
    let saved = bills
        .compute_and_save(&BillInput::new("July", "300", 1.0))
        .expect("save");

    assert!(bills.delete(saved.id).expect("delete"));
    assert!(matches!(bills.get(saved.id), Err(AppError::NotFound(_))));
    assert!(!bills.delete(saved.id).expect("delete again"));
    assert!(!bills.delete(4242).expect("delete unknown"));
}

#[test]
fn list_returns_newest_first() {
    let (_dir, app_state) = setup();
    let bills = &app_state.services.bills;
    let ids = ["January", "February", "March"]
        .into_iter()
        .map(|month| {
            bills
                .compute_and_save(&BillInput::new(month, "100", 0.0))
                .expect("save")
                .id
        })
        .collect::<Vec<_>>();

    let listed = bills
        .list()
        .expect("list")
        .into_iter()
        .map(|bill| bill.id)
        .collect::<Vec<_>>();
    assert_eq!(listed, ids.into_iter().rev().collect::<Vec<_>>());
}

#[test]
fn unreachable_store_is_a_persistence_error() {
    let dir = tempdir().expect("temp dir");
    let app_state = AppState::new(dir.path().join("missing").join("bills.sqlite"));
    let bills = &app_state.services.bills;

    let err = bills
        .compute_and_save(&BillInput::new("August", "100", 0.0))
        .expect_err("no store");
    assert!(matches!(err, AppError::Persistence(_)));
    let api: ApiError = err.into();
    assert_eq!(api.status, 500);
}

#[test]
fn bill_view_formats_for_display() {
    let (_dir, app_state) = setup();
    let bills = &app_state.services.bills;
    let saved = bills
        .compute_and_save(&BillInput::new("September", "1000", 5.0))
        .expect("save");

    let view = BillView::from(&saved);
    assert_eq!(view.month, "September");
    assert_eq!(view.consumption_display, "1000 kWh");
    assert_eq!(view.rebate_display, "5%");
    assert_eq!(view.total_charge_display, "RM 395.60");
    assert_eq!(view.final_cost_display, "RM 375.82");

    let json = serde_json::to_value(&view).expect("serialize");
    assert_eq!(json["id"], saved.id);
}

#[test]
fn save_rederives_charges_from_inputs() {
    let (_dir, app_state) = setup();
    let bills = &app_state.services.bills;
    let tampered = ComputedBill {
        month: Month::March,
        consumption: 500.0,
        rebate: Rebate::Five,
        total_charge: 1.0,
        final_cost: 9999.0,
    };

    let saved = bills.save(&tampered).expect("save");
    let expected_total = 43.60 + 100.0 * 0.334 + 200.0 * 0.516;
    assert_close(saved.total_charge, expected_total);
    assert_close(saved.final_cost, expected_total * 0.95);
    assert_eq!(bills.get(saved.id).expect("reload"), saved);

    let out_of_range = ComputedBill {
        consumption: 5000.0,
        ..tampered
    };
    let err = bills.save(&out_of_range).expect_err("rejected");
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::OutOfRange(_))
    ));
    assert_eq!(bills.list().expect("list").len(), 1);
}
