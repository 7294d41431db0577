use chrono::NaiveDate;
use vitago_api::balance::caloric_balance;
use vitago_api::catalog::FoodCatalog;
use vitago_api::energy::{estimate_activity_calories, Effort};
use vitago_api::food_log::{contributors, DayLog};
use vitago_api::intake::{evaluate_nutrient, IntakeStatus};
use vitago_api::models::{
    ActivityEntry, ActivityKind, ActivityLevel, Goal, MealMoment, Sex, Tier, UserProfile,
};
use vitago_api::nutrients::Nutrient;
use vitago_api::period::Period;
use vitago_api::recommendations::recommend;
use vitago_api::report::{period_report, DayData};
use vitago_api::semaphore::{evaluate_food, Semaphore};

const CATALOG: &str = r#"[
    {
        "Nombre del alimento": "Pechuga de pollo",
        "Grupo": "Carnes",
        "Calorías por 100g": 165,
        "Proteínas (g)": 31,
        "Grasas (g)": 3.6,
        "Grasa saturada (g)": 1,
        "Sodio (mg)": 74,
        "Potasio (mg)": 256
    },
    {
        "Nombre del alimento": "Arroz blanco cocido",
        "Calorias por 100g": 130,
        "Proteinas (g)": 2.7,
        "Carbohidratos (g)": 28,
        "Fibra (g)": 0.4,
        "Grasas (g)": 0.3,
        "Azucares (g)": 0.1,
        "Sodio (mg)": 1,
        "unidades habitual": "taza",
        "gramos por unidades": 160
    }
]"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn profile() -> UserProfile {
    UserProfile {
        sex: Some(Sex::Male),
        weight_kg: 70.0,
        height_cm: 175.0,
        birth_date: Some(date(1995, 1, 1)),
        activity_level: Some(ActivityLevel::Moderate),
        goal: Some(Goal::Lose),
        expenditure: Some(2393.0),
    }
}

#[test]
fn reference_profile_expenditure() {
    assert_eq!(profile().estimated_expenditure(date(2025, 3, 1)), 2393);
}

#[test]
fn deviation_sign_status_and_color_agree() {
    for ingested in (0..=300).step_by(7) {
        let ingested = f64::from(ingested);
        let e = evaluate_nutrient(Nutrient::Protein, ingested, 100.0, Some(Goal::Maintain));
        let dev = e.deviation.percent().unwrap();
        assert_eq!(dev, (ingested - 100.0).round() as i64);

        let expected_status = match dev.signum() {
            -1 => IntakeStatus::Deficit,
            1 => IntakeStatus::Excess,
            _ => IntakeStatus::Correct,
        };
        assert_eq!(e.status, expected_status);

        let expected_color = match dev.abs() {
            0..=10 => Tier::Green,
            11..=30 => Tier::Amber,
            _ => Tier::Red,
        };
        assert_eq!(e.color, expected_color);
    }
}

#[test]
fn lose_goal_balance_examples() {
    let goal = Some(Goal::Lose);
    assert_eq!(caloric_balance(1750.0, 0.0, 2000.0, goal).color, Tier::Green);
    assert_eq!(caloric_balance(1850.0, 0.0, 2000.0, goal).color, Tier::Amber);
    assert_eq!(caloric_balance(1950.0, 0.0, 2000.0, goal).color, Tier::Red);
}

#[test]
fn steps_ignore_met_table() {
    let kcal = estimate_activity_calories(
        ActivityKind::DailySteps,
        Effort::Steps(8000),
        &profile(),
        date(2025, 3, 1),
    );
    assert_eq!(kcal, 320);
}

#[test]
fn catalog_food_ratings_are_stable() {
    let catalog = FoodCatalog::from_json(CATALOG).unwrap();
    let rice = catalog.search("ARROZ")[0];

    let first = evaluate_food(rice);
    assert_eq!(first, evaluate_food(rice));
    assert_eq!(first.get("Calorías").unwrap().status, Semaphore::Red);
    assert_eq!(first.get("Hidratos de carbono").unwrap().status, Semaphore::Gray);
    assert_eq!(first.get("Grasas").unwrap().status, Semaphore::Green);

    let chicken = evaluate_food(catalog.find("Pechuga de pollo").unwrap());
    assert_eq!(chicken.get("Proteínas").unwrap().status, Semaphore::Green);
    assert!(chicken.get("Hidratos de carbono").is_none());
}

#[test]
fn logged_day_feeds_a_weekly_report() {
    let catalog = FoodCatalog::from_json(CATALOG).unwrap();
    let chicken = catalog.find("Pechuga de pollo").unwrap();
    let rice = catalog.find("Arroz blanco cocido").unwrap();
    let cup = rice.grams_for_units(1.0).unwrap();

    let today = date(2025, 3, 5);
    let dates = Period::CurrentWeek.dates(today);
    assert_eq!(dates.len(), 3);

    let mut lunch_day = DayLog::new(dates[1]);
    lunch_day.add_items(
        MealMoment::Lunch,
        vec![chicken.portion(200.0), rice.portion(cup)],
    );
    lunch_day.add_items(MealMoment::Dinner, vec![rice.portion(100.0)]);
    lunch_day.remove(MealMoment::Dinner, 0).unwrap();
    lunch_day.edit_grams(MealMoment::Lunch, 0, 150.0).unwrap();

    let lunch = lunch_day.moment(MealMoment::Lunch).unwrap();
    let sum: f64 = lunch.items().iter().map(|i| i.calories).sum();
    assert!((lunch.total_calories() - sum).abs() < 1e-9);
    assert!(lunch_day.moment(MealMoment::Dinner).is_none());

    let run = ActivityEntry {
        id: None,
        kind: ActivityKind::Running,
        duration_minutes: Some(40.0),
        heart_rate: None,
        pace: Some("5:30".to_string()),
        calories: 420.0,
        date: dates[1],
    };

    let days: Vec<DayData> = dates
        .iter()
        .map(|d| {
            if *d == dates[1] {
                DayData {
                    log: lunch_day.clone(),
                    activities: vec![run.clone()],
                }
            } else {
                DayData {
                    log: DayLog::new(*d),
                    activities: Vec::new(),
                }
            }
        })
        .collect();

    let p = profile();
    let daily = recommend(&p, &[run.clone()]);
    let report = period_report(&days, &daily, p.goal);

    assert_eq!(report.days_with_records, 1);
    assert_eq!(report.balance.burned, 420.0);
    assert_eq!(report.balance.base, 2393.0);
    // 150 g chicken + one cup of rice, far below the day's expenditure
    assert!((report.balance.ingested - (247.5 + 208.0)).abs() < 1e-9);
    assert_eq!(report.balance.color, Tier::Green);

    let top = contributors(&[lunch_day], Nutrient::Protein);
    assert_eq!(top[0].name, "Pechuga de pollo");
}
