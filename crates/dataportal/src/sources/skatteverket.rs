//! Skatteverket rowstore datasets.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::diagnostics::Diagnostics;
use crate::fetch::Fetcher;
use crate::mapper;
use crate::models::{
    FastighetsskattQuery, RowstoreResponse, SkattAvgift, TaxeringsenhetQuery, TypKod,
};
use crate::params::normalize;
use crate::types::{DataportalError, DataportalResult, Lookup};

#[derive(Debug, Clone)]
pub struct Skatteverket {
    fetcher: Fetcher,
    typkod_url: String,
    fastighetsskatt_url: String,
}

impl Skatteverket {
    pub fn new(fetcher: Fetcher, typkod_url: &str, fastighetsskatt_url: &str) -> Self {
        Self {
            fetcher,
            typkod_url: typkod_url.to_string(),
            fastighetsskatt_url: fastighetsskatt_url.to_string(),
        }
    }

    /// Look up a single taxeringsenhet typkod.
    pub async fn get_typkod(
        &self,
        typkod: &str,
        diag: &dyn Diagnostics,
    ) -> DataportalResult<Lookup<TypKod>> {
        diag.info(&format!("Getting typkod: {typkod}"));
        if typkod.trim().is_empty() {
            return Err(DataportalError::InvalidQuery(
                "typkod must not be empty".to_string(),
            ));
        }

        let query = TaxeringsenhetQuery::page(1, 0).with_typkod(typkod);
        let response = self.query_typkoder(&query, diag).await?;

        let found: Lookup<TypKod> = response.results.into_iter().next().into();
        if !found.is_found() {
            diag.warning(&format!("Typkod {typkod} not found"));
        }
        Ok(found)
    }

    /// Typkoder whose description matches `description`.
    pub async fn typkoder_by_description(
        &self,
        description: &str,
        diag: &dyn Diagnostics,
    ) -> DataportalResult<Vec<TypKod>> {
        diag.info(&format!(
            "Getting typkoder with description containing: {description}"
        ));
        let query =
            TaxeringsenhetQuery::page(TaxeringsenhetQuery::MAX_LIMIT, 0).with_beskrivning(description);
        let response = self.query_typkoder(&query, diag).await?;

        if response.results.is_empty() {
            diag.warning(&format!(
                "No typkoder found with description containing '{description}'"
            ));
        }
        Ok(response.results)
    }

    pub async fn list_typkoder(
        &self,
        limit: u32,
        offset: u32,
        diag: &dyn Diagnostics,
    ) -> DataportalResult<RowstoreResponse<TypKod>> {
        diag.info(&format!("Listing typkoder with limit={limit}, offset={offset}"));
        self.query_typkoder(&TaxeringsenhetQuery::page(limit, offset), diag)
            .await
    }

    pub async fn query_typkoder(
        &self,
        query: &TaxeringsenhetQuery,
        diag: &dyn Diagnostics,
    ) -> DataportalResult<RowstoreResponse<TypKod>> {
        query.validate()?;
        self.rowstore(&self.typkod_url, query, diag).await
    }

    pub async fn search_fastighetsskatt(
        &self,
        query: &FastighetsskattQuery,
        diag: &dyn Diagnostics,
    ) -> DataportalResult<RowstoreResponse<SkattAvgift>> {
        diag.info(&format!(
            "Searching fastighetsskatt and avgift with params={query:?}"
        ));
        query.validate()?;
        self.rowstore(&self.fastighetsskatt_url, query, diag).await
    }

    pub async fn list_fastighetsskatt(
        &self,
        limit: u32,
        offset: u32,
        diag: &dyn Diagnostics,
    ) -> DataportalResult<RowstoreResponse<SkattAvgift>> {
        diag.info(&format!(
            "Listing fastighetsskatt and avgift with limit={limit}, offset={offset}"
        ));
        let query = FastighetsskattQuery::page(limit, offset);
        query.validate()?;
        self.rowstore(&self.fastighetsskatt_url, &query, diag).await
    }

    async fn rowstore<Q, T>(
        &self,
        url: &str,
        query: &Q,
        diag: &dyn Diagnostics,
    ) -> DataportalResult<RowstoreResponse<T>>
    where
        Q: Serialize,
        T: DeserializeOwned,
    {
        let params = normalize(query)?;
        diag.info(&format!("Making request to {url} with params: {params:?}"));

        let payload = self.fetcher.get_json(url, &params).await?;
        diag.debug(&format!("Response data: {payload}"));

        mapper::decode(url, payload)
    }
}
