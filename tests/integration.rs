use chrono::Local;
use vitago_api::energy::Effort;
use vitago_api::food_log::FoodItem;
use vitago_api::models::{ActivityEntry, ActivityKind, MealMoment};
use vitago_api::nutrients::NutrientBreakdown;
use vitago_api::period::Period;
use vitago_api::{ClientConfig, Error, VitaGoClient};

fn get_credentials() -> Option<(ClientConfig, String, String)> {
    dotenvy::dotenv().ok();
    let config = ClientConfig::from_env().ok()?;
    let email = std::env::var("VITAGO_EMAIL").ok()?;
    let password = std::env::var("VITAGO_PASSWORD").ok()?;
    Some((config, email, password))
}

async fn authenticated_client() -> Option<VitaGoClient> {
    let (config, email, password) = get_credentials()?;
    VitaGoClient::login(&config, &email, &password).await.ok()
}

#[tokio::test]
async fn profile_and_recommendations() {
    let Some(mut client) = authenticated_client().await else {
        eprintln!("skipping profile_and_recommendations: no credentials");
        return;
    };
    let today = Local::now().date_naive();

    match client.get_profile().await {
        Ok(profile) => {
            let recs = client.recommendations(today).await.unwrap();
            assert!(recs.expenditure > 0.0);
            assert_eq!(recs.fiber, 25.0);
            if !profile.weight_kg.is_nan() {
                assert!(recs.protein > 0.0);
            }
        }
        Err(e) => {
            assert!(matches!(
                e.downcast_ref::<Error>(),
                Some(Error::UserNotFound(_))
            ));
        }
    }
}

#[tokio::test]
async fn add_and_remove_food() {
    let Some(mut client) = authenticated_client().await else {
        eprintln!("skipping add_and_remove_food: no credentials");
        return;
    };
    let today = Local::now().date_naive();
    let moment = MealMoment::AfternoonSnack;

    let before = client.day_log(today).await.unwrap();
    let existing = before.moment(moment).map_or(0, |r| r.items().len());

    let item = FoodItem {
        name: "Prueba integración".to_string(),
        grams: 100.0,
        calories: 52.0,
        nutrients: NutrientBreakdown {
            fiber: 2.4,
            ..Default::default()
        },
    };
    let day = client.add_food(today, moment, vec![item]).await.unwrap();
    let record = day.moment(moment).expect("moment should exist");
    assert_eq!(record.items().len(), existing + 1);

    let day = client.edit_food(today, moment, existing, 200.0).await.unwrap();
    let edited = &day.moment(moment).unwrap().items()[existing];
    assert!((edited.calories - 104.0).abs() < 1e-6);

    // Read back from the store
    let stored = client.day_log(today).await.unwrap();
    let record = stored.moment(moment).unwrap();
    let sum: f64 = record.items().iter().map(|i| i.calories).sum();
    assert!((record.total_calories() - sum).abs() < 1e-6);

    client.remove_food(today, moment, existing).await.unwrap();
    let after = client.day_log(today).await.unwrap();
    assert_eq!(after.moment(moment).map_or(0, |r| r.items().len()), existing);
}

#[tokio::test]
async fn log_and_delete_activity() {
    let Some(mut client) = authenticated_client().await else {
        eprintln!("skipping log_and_delete_activity: no credentials");
        return;
    };
    let today = Local::now().date_naive();
    let Ok(profile) = client.get_profile().await else {
        eprintln!("skipping log_and_delete_activity: no profile");
        return;
    };

    let entry = ActivityEntry::estimated(
        ActivityKind::DailySteps,
        today,
        Effort::Steps(5000),
        None,
        &profile,
    );
    assert_eq!(entry.calories, 200.0);

    let id = client.log_activity(&entry).await.unwrap();
    let logged = client.activities_for(today).await.unwrap();
    assert!(logged.iter().any(|a| a.id.as_deref() == Some(id.as_str())));

    client.delete_activity(&id).await.unwrap();
    let logged = client.activities_for(today).await.unwrap();
    assert!(logged.iter().all(|a| a.id.as_deref() != Some(id.as_str())));
}

#[tokio::test]
async fn weekly_report() {
    let Some(mut client) = authenticated_client().await else {
        eprintln!("skipping weekly_report: no credentials");
        return;
    };
    let today = Local::now().date_naive();
    if client.get_profile().await.is_err() {
        eprintln!("skipping weekly_report: no profile");
        return;
    }

    let report = client
        .period_report(Period::LastSevenDays, today)
        .await
        .unwrap();
    assert!(report.days_with_records <= 7);
    assert_eq!(report.nutrients.len(), 10);
}
