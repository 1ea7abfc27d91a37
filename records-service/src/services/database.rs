use crate::models::{Doctor, Patient};
use crate::services::store::{RecordStore, DOCTORS_COLLECTION, PATIENTS_COLLECTION};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    /// Lookup indexes for `patients.UHID` and
    /// `doctors.appointments.patientId`. Neither is unique: the data is
    /// owned upstream and may contain duplicates.
    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for records-service");

        let uhid_index = IndexModel::builder()
            .keys(doc! { "UHID": 1 })
            .options(
                IndexOptions::builder()
                    .name("uhid_lookup".to_string())
                    .build(),
            )
            .build();

        self.patients()
            .create_index(uhid_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create UHID index on patients collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on patients.UHID");

        let appointment_index = IndexModel::builder()
            .keys(doc! { "appointments.patientId": 1 })
            .options(
                IndexOptions::builder()
                    .name("appointment_patient_lookup".to_string())
                    .build(),
            )
            .build();

        self.doctors()
            .create_index(appointment_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create appointments.patientId index on doctors collection: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on doctors.appointments.patientId");

        Ok(())
    }

    pub fn patients(&self) -> Collection<Patient> {
        self.db.collection(PATIENTS_COLLECTION)
    }

    pub fn doctors(&self) -> Collection<Doctor> {
        self.db.collection(DOCTORS_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl RecordStore for MongoDb {
    async fn list_patients(&self) -> Result<Vec<Patient>, AppError> {
        let cursor = self.patients().find(doc! {}, None).await?;
        let patients: Vec<Patient> = cursor.try_collect().await?;
        tracing::debug!(count = patients.len(), "Fetched patients");
        Ok(patients)
    }

    async fn find_patient(&self, uhid: &str) -> Result<Option<Patient>, AppError> {
        let patient = self
            .patients()
            .find_one(doc! { "UHID": uhid }, None)
            .await?;
        Ok(patient)
    }

    async fn find_doctors_with_patient(&self, patient_id: &str) -> Result<Vec<Doctor>, AppError> {
        let cursor = self
            .doctors()
            .find(doc! { "appointments.patientId": patient_id }, None)
            .await?;
        let doctors: Vec<Doctor> = cursor.try_collect().await?;
        tracing::debug!(
            patient_id = %patient_id,
            count = doctors.len(),
            "Fetched doctors with matching appointments"
        );
        Ok(doctors)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
