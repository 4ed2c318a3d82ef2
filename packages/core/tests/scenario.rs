//! Integration tests for the travel registry.
//!
//! Drives the public API through the two-visitor, two-park scenario.

use parkways_core::{
    domain::{ParkId, TravelRepository, VisitorId},
    infrastructure::{
        dto::{ParkSummaryDto, VisitorSummaryDto},
        repository::InMemoryTravelRepository,
    },
    usecase::{
        RecordTripError, RecordTripUseCase, RegisterParkUseCase, RegisterVisitorUseCase,
        TravelQueryUseCase,
    },
};

struct Fixture {
    repo: InMemoryTravelRepository,
    john: VisitorId,
    alice: VisitorId,
    yellowstone: ParkId,
    yosemite: ParkId,
}

fn setup() -> Fixture {
    let mut repo = InMemoryTravelRepository::new();
    let john = RegisterVisitorUseCase::new(&mut repo).execute("John").unwrap();
    let alice = RegisterVisitorUseCase::new(&mut repo).execute("Alice").unwrap();
    let yellowstone = RegisterParkUseCase::new(&mut repo)
        .execute("Yellowstone")
        .unwrap();
    let yosemite = RegisterParkUseCase::new(&mut repo)
        .execute("Yosemite")
        .unwrap();

    let mut record = RecordTripUseCase::new(&mut repo);
    record.execute(john, yellowstone, "May 5th", "May 6th").unwrap();
    record.execute(john, yosemite, "May 7th", "May 8th").unwrap();
    record.execute(alice, yellowstone, "May 9th", "May 10th").unwrap();

    Fixture {
        repo,
        john,
        alice,
        yellowstone,
        yosemite,
    }
}

#[test]
fn test_scenario_aggregates() {
    // テスト項目: デモシナリオの集計結果
    // given (前提条件):
    let f = setup();

    // when (操作):
    let query = TravelQueryUseCase::new(&f.repo);

    // then (期待する結果):
    assert_eq!(query.total_visits(f.yellowstone).unwrap(), 2);
    assert_eq!(query.total_visits(f.yosemite).unwrap(), 1);
    assert_eq!(
        query
            .best_visitor(f.yellowstone)
            .unwrap()
            .unwrap()
            .name()
            .as_str(),
        "John"
    );
    assert_eq!(query.visitor_national_parks(f.john).unwrap().len(), 2);
    assert_eq!(query.visitor_national_parks(f.alice).unwrap().len(), 1);
    assert_eq!(
        query.most_visited().unwrap().name().as_str(),
        "Yellowstone"
    );
}

#[test]
fn test_scenario_summaries() {
    // テスト項目: サマリー DTO がデモ出力と一致する
    // given (前提条件):
    let f = setup();
    let query = TravelQueryUseCase::new(&f.repo);

    // when (操作):
    let visitor = VisitorSummaryDto::build(&query, f.john).unwrap();
    let park = ParkSummaryDto::build(&query, f.yellowstone).unwrap();

    // then (期待する結果):
    assert_eq!(visitor.trips, vec!["May 5th", "May 7th"]);
    assert_eq!(visitor.national_parks, vec!["Yellowstone", "Yosemite"]);
    assert_eq!(park.trips, vec!["May 5th", "May 9th"]);
    assert_eq!(park.visitors, vec!["John", "Alice"]);
    assert_eq!(park.total_visits, 2);
    assert_eq!(park.best_visitor.as_deref(), Some("John"));
}

#[test]
fn test_every_trip_points_back_to_its_endpoints() {
    // テスト項目: 各端点の旅行は全てその端点を参照している
    // given (前提条件):
    let f = setup();

    // then (期待する結果):
    for id in [f.john, f.alice] {
        for trip in f.repo.visitor(id).unwrap().trips() {
            assert_eq!(f.repo.trip(*trip).unwrap().visitor(), id);
        }
    }
    for park in f.repo.parks() {
        for trip in park.trips() {
            assert_eq!(f.repo.trip(*trip).unwrap().national_park(), park.id());
        }
    }
}

#[test]
fn test_invalid_date_leaves_scenario_untouched() {
    // テスト項目: 不正な日付の旅行は記録されず、既存の集計も変わらない
    // given (前提条件):
    let mut f = setup();

    // when (操作):
    let result =
        RecordTripUseCase::new(&mut f.repo).execute(f.alice, f.yosemite, "13", "May 12th");

    // then (期待する結果):
    assert!(matches!(result, Err(RecordTripError::Validation(_))));
    assert_eq!(f.repo.trip_count(), 3);
    assert_eq!(f.repo.visitor(f.alice).unwrap().trips().len(), 1);
    assert_eq!(f.repo.park(f.yosemite).unwrap().total_visits(), 1);
}

#[test]
fn test_most_visited_follows_new_trips() {
    // テスト項目: 集計は呼び出し時に導出される（追加の旅行が反映される）
    // given (前提条件):
    let mut f = setup();
    let mut record = RecordTripUseCase::new(&mut f.repo);
    record.execute(f.alice, f.yosemite, "June 1st", "June 2nd").unwrap();

    // when (操作): 同数（2 対 2）
    let tied = TravelQueryUseCase::new(&f.repo).most_visited().unwrap().id();

    RecordTripUseCase::new(&mut f.repo)
        .execute(f.alice, f.yosemite, "June 3rd", "June 4th")
        .unwrap();
    let ahead = TravelQueryUseCase::new(&f.repo).most_visited().unwrap().id();

    // then (期待する結果):
    assert_eq!(tied, f.yellowstone);
    assert_eq!(ahead, f.yosemite);
}

#[test]
fn test_reset_starts_a_fresh_registry() {
    // テスト項目: reset 後は most_visited が None になる
    // given (前提条件):
    let mut f = setup();

    // when (操作):
    f.repo.reset();

    // then (期待する結果):
    assert!(TravelQueryUseCase::new(&f.repo).most_visited().is_none());
}
