use anyhow::Result;
use chrono::NaiveDate;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::auth::FirebaseAuth;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::firestore::{
    field_equals_query, parse_document, to_firestore_fields, FirestoreClient,
};
use crate::food_log::{DayLog, FoodItem};
use crate::models::{ActivityEntry, MealMoment, UserProfile};
use crate::period::Period;
use crate::recommendations::{recommend, Recommendations};
use crate::report::{period_report, DayData, PeriodReport};

const USERS: &str = "usuarios";
const ACTIVITIES: &str = "actividades";
const RECORDS: &str = "registros";

/// Profile fields rewritten by [`VitaGoClient::update_profile`].
const PROFILE_FIELDS: [&str; 7] = [
    "sexo",
    "peso",
    "altura",
    "fechaNacimiento",
    "actividad",
    "objetivo",
    "get",
];

/// Authenticated access to one user's VitaGo data.
#[derive(Clone)]
pub struct VitaGoClient {
    pub auth: FirebaseAuth,
    pub firestore: FirestoreClient,
    user_id: Option<String>,
}

impl VitaGoClient {
    pub fn new(config: &ClientConfig, refresh_token: String) -> Self {
        let auth = FirebaseAuth::new(config, refresh_token);
        let firestore = FirestoreClient::new(config, auth.clone());
        Self {
            auth,
            firestore,
            user_id: None,
        }
    }

    /// Sign in with email and password.
    pub async fn login(config: &ClientConfig, email: &str, password: &str) -> Result<Self> {
        let auth = FirebaseAuth::sign_in_with_email(config, email, password).await?;
        let firestore = FirestoreClient::new(config, auth.clone());
        Ok(Self {
            auth,
            firestore,
            user_id: None,
        })
    }

    pub async fn get_user_id(&mut self) -> Result<String> {
        if let Some(ref uid) = self.user_id {
            return Ok(uid.clone());
        }
        let uid = self.auth.get_user_id().await?;
        self.user_id = Some(uid.clone());
        Ok(uid)
    }

    async fn user_path(&mut self) -> Result<String> {
        let uid = self.get_user_id().await?;
        Ok(format!("{}/{}", USERS, uid))
    }

    /// Get the user profile document.
    ///
    /// Fails with [`Error::UserNotFound`] when the user has no profile yet.
    pub async fn get_profile(&mut self) -> Result<UserProfile> {
        let uid = self.get_user_id().await?;
        let path = format!("{}/{}", USERS, uid);
        let doc = self
            .firestore
            .get_document_opt(&path)
            .await?
            .ok_or(Error::UserNotFound(uid))?;
        Ok(serde_json::from_value(parse_document(&doc))?)
    }

    /// Store an edited profile, recomputing its cached daily expenditure.
    ///
    /// Returns the profile as stored.
    pub async fn update_profile(
        &mut self,
        mut profile: UserProfile,
        today: NaiveDate,
    ) -> Result<UserProfile> {
        let path = self.user_path().await?;
        let get = profile.estimated_expenditure(today);
        profile.expenditure = (get > 0).then_some(f64::from(get));
        debug!(get, "updating profile");

        let fields = to_firestore_fields(&serde_json::to_value(&profile)?);
        let mask = profile_update_mask(&fields);
        let mask: Vec<&str> = mask.iter().map(String::as_str).collect();
        self.firestore.patch_document(&path, fields, &mask).await?;

        Ok(profile)
    }

    /// Activities logged on `date`. Entries that cannot be read are skipped.
    pub async fn activities_for(&mut self, date: NaiveDate) -> Result<Vec<ActivityEntry>> {
        let parent = self.user_path().await?;
        let query = field_equals_query(
            ACTIVITIES,
            "fecha",
            &json!(date.format("%Y-%m-%d").to_string()),
        );
        let docs = self.firestore.run_query(Some(&parent), query).await?;

        let mut entries = Vec::with_capacity(docs.len());
        for doc in &docs {
            match serde_json::from_value::<ActivityEntry>(parse_document(doc)) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(id = doc.id(), error = %e, "skipping unreadable activity"),
            }
        }
        Ok(entries)
    }

    /// Persist a new activity and return its id.
    pub async fn log_activity(&mut self, entry: &ActivityEntry) -> Result<String> {
        let collection = format!("{}/{}", self.user_path().await?, ACTIVITIES);
        let fields = to_firestore_fields(&serde_json::to_value(entry)?);
        let doc = self.firestore.create_document(&collection, fields).await?;
        Ok(doc.id().to_string())
    }

    /// Replace the stored fields of an existing activity.
    pub async fn edit_activity(&mut self, id: &str, entry: &ActivityEntry) -> Result<()> {
        let path = format!("{}/{}/{}", self.user_path().await?, ACTIVITIES, id);
        let fields = to_firestore_fields(&serde_json::to_value(entry)?);
        // No mask: every field of the document is replaced.
        self.firestore.patch_document(&path, fields, &[]).await?;
        Ok(())
    }

    pub async fn delete_activity(&mut self, id: &str) -> Result<()> {
        let path = format!("{}/{}/{}", self.user_path().await?, ACTIVITIES, id);
        self.firestore.delete_document(&path).await
    }

    /// Food log for `date`; empty if nothing was recorded.
    pub async fn day_log(&mut self, date: NaiveDate) -> Result<DayLog> {
        let path = self.day_path(date).await?;
        let Some(doc) = self.firestore.get_document_opt(&path).await? else {
            return Ok(DayLog::new(date));
        };
        let parsed = parse_document(&doc);
        Ok(match parsed.as_object() {
            Some(fields) => DayLog::from_fields(date, fields),
            None => DayLog::new(date),
        })
    }

    pub async fn add_food(
        &mut self,
        date: NaiveDate,
        moment: MealMoment,
        items: Vec<FoodItem>,
    ) -> Result<DayLog> {
        let mut day = self.day_log(date).await?;
        day.add_items(moment, items);
        self.write_moment(&day, moment).await?;
        Ok(day)
    }

    /// Change the grams of one logged food, rescaling its values.
    pub async fn edit_food(
        &mut self,
        date: NaiveDate,
        moment: MealMoment,
        index: usize,
        grams: f64,
    ) -> Result<DayLog> {
        let mut day = self.day_log(date).await?;
        day.edit_grams(moment, index, grams)?;
        self.write_moment(&day, moment).await?;
        Ok(day)
    }

    pub async fn remove_food(
        &mut self,
        date: NaiveDate,
        moment: MealMoment,
        index: usize,
    ) -> Result<DayLog> {
        let mut day = self.day_log(date).await?;
        day.remove(moment, index)?;
        self.write_moment(&day, moment).await?;
        Ok(day)
    }

    /// Write one moment of `day`, deleting its field when it is empty.
    async fn write_moment(&mut self, day: &DayLog, moment: MealMoment) -> Result<()> {
        let path = self.day_path(day.date).await?;
        let fields = match day.moment(moment) {
            Some(record) => {
                let mut obj = Map::new();
                obj.insert(moment.as_str().to_string(), serde_json::to_value(record)?);
                to_firestore_fields(&Value::Object(obj))
            }
            None => Map::new(),
        };

        // Moment names contain spaces, so the path must be backtick-quoted
        let field_mask = format!("`{}`", moment.as_str());
        self.firestore
            .patch_document(&path, fields, &[&field_mask])
            .await?;

        Ok(())
    }

    async fn day_path(&mut self, date: NaiveDate) -> Result<String> {
        Ok(format!(
            "{}/{}/{}",
            self.user_path().await?,
            RECORDS,
            date.format("%Y-%m-%d")
        ))
    }

    /// Nutrient targets for `date`, taking that day's activities into account.
    pub async fn recommendations(&mut self, date: NaiveDate) -> Result<Recommendations> {
        let profile = self.get_profile().await?;
        let activities = self.activities_for(date).await?;
        Ok(recommend(&profile, &activities))
    }

    /// Report over `period`. Targets are today's, accumulated over the days
    /// that have food records.
    pub async fn period_report(&mut self, period: Period, today: NaiveDate) -> Result<PeriodReport> {
        let profile = self.get_profile().await?;
        let daily = recommend(&profile, &self.activities_for(today).await?);

        let mut days = Vec::new();
        for date in period.dates(today) {
            let log = self.day_log(date).await?;
            let activities = self.activities_for(date).await?;
            days.push(DayData { log, activities });
        }
        debug!(days = days.len(), "building period report");

        Ok(period_report(&days, &daily, profile.goal))
    }
}

/// Quoted mask for a profile update.
///
/// Fields the profile has no value for stay out of the mask so an unreadable
/// stored value is left alone. `get` is always included, which clears a stale
/// expenditure when none can be computed.
fn profile_update_mask(fields: &Map<String, Value>) -> Vec<String> {
    PROFILE_FIELDS
        .iter()
        .filter(|f| **f == "get" || fields.contains_key(**f))
        .map(|f| format!("`{}`", f))
        .collect()
}
