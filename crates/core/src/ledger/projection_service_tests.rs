use super::*;
use crate::errors::{Error, Result};
use crate::settings::{Settings, SettingsRepositoryTrait};
use crate::test_support::{credit, day, debit, on_channel, owned_by, InMemoryTransactionRepository};
use crate::transactions::{Channel, Transaction};
use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::sync::Arc;

struct FixedSettingsRepository {
    settings: Settings,
}

#[async_trait]
impl SettingsRepositoryTrait for FixedSettingsRepository {
    fn get_settings(&self) -> Result<Settings> {
        Ok(self.settings.clone())
    }

    async fn save_settings(&self, _settings: &Settings) -> Result<()> {
        unimplemented!()
    }
}

fn service_with(transactions: Vec<Transaction>, timezone: &str) -> ProjectionService {
    ProjectionService::new(
        Arc::new(InMemoryTransactionRepository::with(transactions)),
        Arc::new(FixedSettingsRepository {
            settings: Settings {
                timezone: timezone.to_string(),
            },
        }),
    )
}

fn owner_ledger() -> Vec<Transaction> {
    vec![
        owned_by(credit("c1", dec!(100), day(1)), "owner-1"),
        owned_by(debit("d2", dec!(30), day(2)), "owner-1"),
        owned_by(debit("d3", dec!(90), day(3)), "owner-1"),
        owned_by(debit("d4", dec!(10), day(4)), "owner-1"),
        owned_by(on_channel(credit("b1", dec!(1000), day(1)), Channel::B), "owner-1"),
        owned_by(debit("other", dec!(5000), day(1)), "owner-2"),
    ]
}

#[test]
fn test_runway_uses_stored_ledger() {
    let service = service_with(owner_ledger(), "UTC");

    let runway = service
        .get_runway_as_of("owner-1", Some(Channel::A), day(1))
        .unwrap();
    assert_eq!(runway, RunwayResult::bounded(day(3), 2, dec!(20)));
    assert!(!runway.is_exhausted());

    let later = service
        .get_runway_as_of("owner-1", Some(Channel::A), day(10))
        .unwrap();
    assert_eq!(later.days_remaining, Some(-7));
    assert!(later.is_exhausted());
}

#[test]
fn test_plain_runway_matches_pinned_exhaustion() {
    let service = service_with(owner_ledger(), "Europe/Paris");

    let plain = service.get_runway("owner-1", Some(Channel::A)).unwrap();
    let pinned = service
        .get_runway_as_of("owner-1", Some(Channel::A), day(1))
        .unwrap();
    assert_eq!(plain.exhaustion_date, pinned.exhaustion_date);
    assert_eq!(plain.amount_short, pinned.amount_short);
}

#[test]
fn test_as_of_forms_pin_today() {
    let service = service_with(owner_ledger(), "UTC");

    let projection = service
        .get_projection_as_of("owner-1", Some(Channel::A), day(2))
        .unwrap();
    assert_eq!(projection.as_of, day(2));
    assert_eq!(projection.runway.days_remaining, Some(1));
    assert_eq!(
        service
            .get_funding_needs_as_of("owner-1", Some(Channel::A), day(2))
            .unwrap(),
        projection.funding_needs
    );

    let overview = service.get_channel_overview_as_of("owner-1", day(2)).unwrap();
    assert_eq!(overview.channel_a, projection);
    assert_eq!(overview.combined.as_of, day(2));
}

#[test]
fn test_combined_runway_nets_both_channels() {
    let service = service_with(owner_ledger(), "UTC");
    let runway = service.get_runway("owner-1", None).unwrap();
    assert!(!runway.is_bounded);
}

#[test]
fn test_funding_needs_and_series() {
    let service = service_with(owner_ledger(), "UTC");

    let needs = service.get_funding_needs("owner-1", Some(Channel::A)).unwrap();
    assert_eq!(
        needs,
        vec![FundingNeed {
            date: day(4),
            amount_needed: dec!(30)
        }]
    );

    let series = service.get_daily_series("owner-1", Some(Channel::B)).unwrap();
    assert_eq!(series.points.len(), 1);
    assert_eq!(series.max_balance, dec!(1000));
}

#[test]
fn test_summary_and_overview_are_scoped_to_owner() {
    let service = service_with(owner_ledger(), "UTC");

    let summary = service.get_summary("owner-1", None).unwrap();
    assert_eq!(summary.transaction_count, 5);
    assert_eq!(summary.balance, dec!(970));

    let overview = service.get_channel_overview("owner-1").unwrap();
    assert_eq!(overview.combined.summary, summary);
    assert!(overview.channel_a.runway.is_bounded);
    assert!(!overview.channel_b.runway.is_bounded);

    let projection = service.get_projection("owner-1", Some(Channel::A)).unwrap();
    assert_eq!(projection, overview.channel_a);
}

#[test]
fn test_unknown_owner_has_unbounded_runway() {
    let service = service_with(owner_ledger(), "UTC");
    let projection = service.get_projection("nobody", None).unwrap();
    assert_eq!(projection.runway, RunwayResult::unbounded());
    assert!(projection.funding_needs.is_empty());
    assert!(projection.daily_series.points.is_empty());
}

#[test]
fn test_bad_timezone_is_a_config_error() {
    let service = service_with(owner_ledger(), "Atlantis/Capital");
    assert!(matches!(
        service.get_runway("owner-1", None),
        Err(Error::InvalidConfigValue(_))
    ));
}

#[test]
fn test_repository_failure_propagates() {
    let service = ProjectionService::new(
        Arc::new(InMemoryTransactionRepository::failing()),
        Arc::new(FixedSettingsRepository {
            settings: Settings::default(),
        }),
    );
    assert!(matches!(
        service.get_projection("owner-1", None),
        Err(Error::Repository(_))
    ));
}
