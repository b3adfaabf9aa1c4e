use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use moneymachine_config::{
    CurrencyCode, Language, MemoryStorage, PREFERENCES_STORAGE_KEY, PaperWidth, Preferences,
    PreferencesStore, PrinterSettings, SECTION_STORAGE_KEY, SectionController, SectionId, SettingsStorage,
    ThemeMode, TicketTemplate,
};
use moneymachine_test_support::fixtures::{
    seeded_memory, seeded_profile, temp_file_storage, with_section,
};
use moneymachine_test_support::mocks::{CountingStorage, FailingStorage};

#[test]
fn selected_section_survives_a_reload() -> anyhow::Result<()> {
    let storage = Rc::new(MemoryStorage::new());

    let first = SectionController::rehydrate(Rc::clone(&storage));
    assert_eq!(first.active(), SectionId::Account);
    first.select(SectionId::Taxes);
    assert_eq!(
        storage.read(SECTION_STORAGE_KEY)?.as_deref(),
        Some("taxes")
    );
    drop(first);

    let reloaded = SectionController::rehydrate(Rc::clone(&storage));
    assert_eq!(reloaded.active(), SectionId::Taxes);
    Ok(())
}

#[test]
fn bogus_section_falls_back_without_rewriting() -> anyhow::Result<()> {
    let storage = with_section("billing");
    let controller = SectionController::rehydrate(&storage);
    assert_eq!(controller.active(), SectionId::Account);
    assert_eq!(
        storage.read(SECTION_STORAGE_KEY)?.as_deref(),
        Some("billing")
    );
    Ok(())
}

#[test]
fn preferences_survive_a_file_backed_reload() -> anyhow::Result<()> {
    let (_dir, storage) = temp_file_storage()?;

    let store = PreferencesStore::load(storage.clone());
    store.set_theme(ThemeMode::Light);
    store.set_language(Language::De);
    store.set_currency(CurrencyCode::Eur);
    store.set_tax_rate_input("16.5");
    store.set_printer_settings(PrinterSettings {
        printer_name: "POS-58".into(),
        paper_width: PaperWidth::Mm58,
        auto_print: true,
        ticket_template: TicketTemplate::Full,
        ..PrinterSettings::default()
    });
    let expected = store.get();
    drop(store);

    let reloaded = PreferencesStore::load(storage);
    assert_eq!(reloaded.get(), expected);
    assert!((reloaded.get().tax_rate.percent() - 16.5).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn section_and_preferences_share_one_file() -> anyhow::Result<()> {
    let (_dir, storage) = temp_file_storage()?;
    let store = PreferencesStore::load(storage.clone());
    let sections = SectionController::rehydrate(storage.clone());

    store.set_currency(CurrencyCode::Jpy);
    sections.select(SectionId::Currency);

    assert!(storage.read(PREFERENCES_STORAGE_KEY)?.is_some());
    assert_eq!(
        storage.read(SECTION_STORAGE_KEY)?.as_deref(),
        Some("currency")
    );
    Ok(())
}

#[test]
fn every_setter_writes_once() {
    let storage = CountingStorage::new();
    let store = PreferencesStore::load(&storage);
    store.set_theme(ThemeMode::Light);
    store.set_tax_rate_input("8");
    store.set_currency(CurrencyCode::Mxn);
    assert_eq!(storage.writes(), 3);
}

#[test]
fn unavailable_storage_never_panics() {
    let store = PreferencesStore::load(FailingStorage);
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    store.subscribe(move |prefs| *sink.borrow_mut() = Some(prefs.currency));
    store.set_currency(CurrencyCode::Gbp);
    assert_eq!(*seen.borrow(), Some(CurrencyCode::Gbp));

    let sections = SectionController::rehydrate(FailingStorage);
    assert_eq!(sections.active(), SectionId::Account);
    assert_eq!(sections.select_raw("printer"), Some(SectionId::Printer));
    assert_eq!(sections.active(), SectionId::Printer);
}

#[test]
fn browser_written_logo_survives_a_setter() -> anyhow::Result<()> {
    let storage = MemoryStorage::with_entries([(
        PREFERENCES_STORAGE_KEY,
        r#"{"theme":"dark","language":"es","currency":"MXN","taxRate":16,"printerName":"","printerWidth":"80mm","autoPrint":false,"ticketTemplate":"full","ticketFooterLines":"Gracias","businessName":"Flores Ana","ticketIcon":"florist","businessLogo":"data:image/png;base64,AAAA","ticketPrintLogo":false}"#,
    )]);
    let store = PreferencesStore::load(&storage);
    store.set_theme(ThemeMode::Light);

    let raw = storage
        .read(PREFERENCES_STORAGE_KEY)?
        .ok_or_else(|| anyhow::anyhow!("document missing after write"))?;
    let doc: Value = serde_json::from_str(&raw)?;
    assert_eq!(doc["theme"], "light");
    assert_eq!(doc["businessLogo"], "data:image/png;base64,AAAA");
    assert_eq!(doc["ticketPrintLogo"], false);
    assert_eq!(doc["businessName"], "Flores Ana");
    Ok(())
}

#[test]
fn seeded_profile_restores_preferences_and_section() -> anyhow::Result<()> {
    let prefs = Preferences {
        language: Language::Es,
        currency: CurrencyCode::Mxn,
        ..Preferences::default()
    };
    let storage = Rc::new(seeded_profile(&prefs, SectionId::Printer)?);

    let store = PreferencesStore::load(Rc::clone(&storage));
    let sections = SectionController::rehydrate(Rc::clone(&storage));
    assert_eq!(store.get(), prefs);
    assert_eq!(sections.active(), SectionId::Printer);

    sections.select(SectionId::Facturacion);
    store.set_tax_rate_input("8");
    drop((store, sections));

    let store = PreferencesStore::load(Rc::clone(&storage));
    let sections = SectionController::rehydrate(storage);
    assert_eq!(store.get().currency, CurrencyCode::Mxn);
    assert!((store.get().tax_rate.percent() - 8.0).abs() < f64::EPSILON);
    assert_eq!(sections.active(), SectionId::Facturacion);
    Ok(())
}

#[test]
fn seeded_preferences_load_without_a_section() -> anyhow::Result<()> {
    let prefs = Preferences {
        theme: ThemeMode::Light,
        ..Preferences::default()
    };
    let storage = seeded_memory(&prefs)?;
    assert_eq!(PreferencesStore::load(&storage).get(), prefs);
    assert_eq!(SectionController::rehydrate(&storage).active(), SectionId::Account);
    Ok(())
}
