mod common;

use common::{date, observation, state};
use gaatoday_service::common::error::AppError;
use gaatoday_service::models::live_updates::LiveView;
use gaatoday_service::models::sources::RawCommentary;
use gaatoday_service::usecases::{ingestion, live_updates, matches};

fn entry(text: &str) -> RawCommentary {
    RawCommentary {
        text: text.to_owned(),
        match_date: Some(date(7, 6)),
    }
}

#[tokio::test]
async fn commentary_moves_the_live_view_forward() {
    let ctx = state().await;
    let mut fixture = observation("Senior Hurling Championship", "Kilkenny", "Galway", date(7, 6));
    fixture.match_time = Some("15:30".to_owned());
    let fixture = matches::upsert(&ctx, &fixture).await.unwrap();

    assert_eq!(
        live_updates::fetch_view(&ctx, &fixture).await.unwrap(),
        LiveView::Scheduled {
            match_time: "15:30".to_owned()
        }
    );

    for text in [
        "10 mins: Kilkenny 0-02 Galway 0-01",
        "40 mins: Kilkenny 1-07 Galway 0-09",
        "FT 70+3 mins: Kilkenny 2-20 Galway 1-18",
    ] {
        live_updates::record_commentary(&ctx, &entry(text), date(1, 1))
            .await
            .unwrap();
    }

    let view = live_updates::fetch_view(&ctx, &fixture).await.unwrap();
    assert!(view.is_final());
    match view {
        LiveView::InPlay { minute, home_score, away_score, .. } => {
            assert_eq!(minute, 73);
            assert_eq!(home_score, "2-20");
            assert_eq!(away_score, "1-18");
        }
        view => panic!("unexpected view {view:?}"),
    }

    let log = live_updates::fetch_log(&ctx, fixture.match_id).await.unwrap();
    let minutes: Vec<i32> = log.iter().map(|u| u.minute).collect();
    assert_eq!(minutes, [10, 40, 73]);

    let since = live_updates::fetch_since(&ctx, fixture.match_id, log[0].created_at)
        .await
        .unwrap();
    assert!(since.iter().all(|u| u.created_at > log[0].created_at));
    assert!(since.iter().all(|u| u.update_id != log[0].update_id));
}

#[tokio::test]
async fn commentary_that_cannot_advance_a_match_is_skipped() {
    let ctx = state().await;
    let fixture = observation("Senior Football Championship", "Dublin", "Kerry", date(7, 6));
    matches::upsert(&ctx, &fixture).await.unwrap();
    let today = date(7, 6);

    let skipped = |text: &'static str| RawCommentary {
        text: text.to_owned(),
        match_date: None,
    };

    assert_eq!(
        live_updates::record_commentary(&ctx, &skipped("Throw-in shortly"), today).await.unwrap_err(),
        AppError::LiveUpdatesUnrecognisedText
    );
    assert_eq!(
        live_updates::record_commentary(&ctx, &skipped("5 mins: Mayo 0-01 Sligo 0-00"), today)
            .await
            .unwrap_err(),
        AppError::LiveUpdatesMatchNotFound
    );

    live_updates::record_commentary(&ctx, &skipped("30 mins: Dublin 0-08 Kerry 0-06"), today)
        .await
        .unwrap();
    assert_eq!(
        live_updates::record_commentary(&ctx, &skipped("30 mins: Dublin 0-08 Kerry 0-06"), today)
            .await
            .unwrap_err(),
        AppError::LiveUpdatesDuplicate
    );
    assert_eq!(
        live_updates::record_commentary(&ctx, &skipped("20 mins: Dublin 0-05 Kerry 0-04"), today)
            .await
            .unwrap_err(),
        AppError::LiveUpdatesOutOfOrder
    );
    live_updates::record_commentary(&ctx, &skipped("Full-time 74 mins: Dublin 1-15 Kerry 0-16"), today)
        .await
        .unwrap();
    assert_eq!(
        live_updates::record_commentary(&ctx, &skipped("75 mins: Dublin 1-16 Kerry 0-16"), today)
            .await
            .unwrap_err(),
        AppError::LiveUpdatesMatchFinished
    );
}

#[tokio::test]
async fn commentary_batches_report_recorded_and_skipped() {
    let ctx = state().await;
    let fixture = observation("Senior Hurling Championship", "Cork", "Clare", date(7, 6));
    matches::upsert(&ctx, &fixture).await.unwrap();

    let entries = [
        entry("12 mins: Cork 0-04 Clare 0-03"),
        entry("Half-time chatter"),
        entry("12 mins: Cork 0-04 Clare 0-03"),
        entry("50 mins: Cork 1-14 Clare 0-16"),
    ];
    let report = ingestion::ingest_commentary(&ctx, &entries, date(7, 6)).await;
    assert_eq!(report.recorded, 2);
    assert_eq!(report.skipped, 2);
}

#[tokio::test]
async fn live_board_lists_the_day_in_throw_in_order() {
    let ctx = state().await;
    let mut evening = observation("Senior Hurling Championship", "Cork", "Clare", date(7, 6));
    evening.match_time = Some("19:00".to_owned());
    let mut afternoon = observation("Senior Football Championship", "Dublin", "Kerry", date(7, 6));
    afternoon.match_time = Some("14:00".to_owned());
    let other_day = observation("Senior Football Championship", "Mayo", "Galway", date(7, 7));
    for fixture in [&evening, &afternoon, &other_day] {
        matches::upsert(&ctx, fixture).await.unwrap();
    }
    live_updates::record_commentary(&ctx, &entry("35 mins: Dublin 0-10 Kerry 0-09"), date(7, 6))
        .await
        .unwrap();

    let board = live_updates::fetch_live_board(&ctx, date(7, 6)).await.unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].details.home_team, "Dublin");
    assert!(matches!(board[0].live, LiveView::InPlay { minute: 35, .. }));
    assert_eq!(
        board[1].live,
        LiveView::Scheduled {
            match_time: "19:00".to_owned()
        }
    );
}
