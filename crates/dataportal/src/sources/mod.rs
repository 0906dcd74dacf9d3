//! Upstream data sources and their endpoints.

pub mod riksdagen;
pub mod skatteverket;

use std::time::Duration;

use crate::fetch::Fetcher;

pub use riksdagen::{DocumentContent, Riksdagen};
pub use skatteverket::Skatteverket;

pub const RIKSDAGEN_ORIGIN: &str = crate::document::CONTENT_ORIGIN;
pub const TYPKOD_DATASET_URL: &str =
    "https://skatteverket.entryscape.net/rowstore/dataset/0db155d8-4a46-4b14-aba6-3531ef4141c7";
pub const FASTIGHETSSKATT_DATASET_URL: &str =
    "https://skatteverket.entryscape.net/rowstore/dataset/ed6459d5-66ae-48a7-bcc8-4bd128f719db";

/// Base URLs of every upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Origin serving both `/dokumentlista/` and `/dokument/`.
    pub riksdagen: String,
    pub typkod: String,
    pub fastighetsskatt: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            riksdagen: RIKSDAGEN_ORIGIN.to_string(),
            typkod: TYPKOD_DATASET_URL.to_string(),
            fastighetsskatt: FASTIGHETSSKATT_DATASET_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Riksdagen,
    Skatteverket,
}

/// Published documentation for a dataset.
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    pub key: &'static str,
    pub title: &'static str,
    pub provider: Provider,
    pub api_url: &'static str,
    pub swagger_url: Option<&'static str>,
    pub dataportal_url: &'static str,
}

pub const DATASETS: &[Dataset] = &[
    Dataset {
        key: "dokumentlista",
        title: "Riksdagen dokumentlista",
        provider: Provider::Riksdagen,
        api_url: "https://data.riksdagen.se/dokumentlista/",
        swagger_url: None,
        dataportal_url: "https://www.dataportal.se/dataservice/98_3023",
    },
    Dataset {
        key: "ledamot",
        title: "Riksdagen ledamöter",
        provider: Provider::Riksdagen,
        api_url: "https://data.riksdagen.se/dokumentlista/",
        swagger_url: None,
        dataportal_url: "https://www.dataportal.se/dataservice/98_3022",
    },
    Dataset {
        key: "kalender",
        title: "Riksdagen kalender",
        provider: Provider::Riksdagen,
        api_url: "https://data.riksdagen.se/dokumentlista/",
        swagger_url: None,
        dataportal_url: "https://www.dataportal.se/dataservice/98_3019",
    },
    Dataset {
        key: "typkod",
        title: "Skatteverket taxeringsenhet typkoder",
        provider: Provider::Skatteverket,
        api_url: TYPKOD_DATASET_URL,
        swagger_url: Some(
            "https://swagger.entryscape.com/?url=https%3A%2F%2Fskatteverket.entryscape.net%2Frowstore%2Fdataset%2F0db155d8-4a46-4b14-aba6-3531ef4141c7%2Fswagger",
        ),
        dataportal_url: "https://www.dataportal.se/datasets/6_67905",
    },
    Dataset {
        key: "fastighetsskatt",
        title: "Skatteverket fastighetsskatt och fastighetsavgift",
        provider: Provider::Skatteverket,
        api_url: FASTIGHETSSKATT_DATASET_URL,
        swagger_url: Some(
            "https://swagger.entryscape.com/?url=https%3A%2F%2Fskatteverket.entryscape.net%2Frowstore%2Fdataset%2Fed6459d5-66ae-48a7-bcc8-4bd128f719db%2Fswagger",
        ),
        dataportal_url: "https://www.dataportal.se/datasets/6_75017",
    },
];

pub fn find_dataset(key: &str) -> Option<&'static Dataset> {
    DATASETS.iter().find(|d| d.key == key)
}

/// All upstream clients sharing one fetcher configuration.
#[derive(Debug, Clone)]
pub struct Dataportal {
    pub riksdagen: Riksdagen,
    pub skatteverket: Skatteverket,
}

impl Dataportal {
    pub fn new(endpoints: &Endpoints, timeout: Duration) -> Self {
        let fetcher = Fetcher::new(timeout);
        Self {
            riksdagen: Riksdagen::new(fetcher.clone(), &endpoints.riksdagen),
            skatteverket: Skatteverket::new(
                fetcher,
                &endpoints.typkod,
                &endpoints.fastighetsskatt,
            ),
        }
    }
}

impl Default for Dataportal {
    fn default() -> Self {
        Self::new(&Endpoints::default(), crate::fetch::DEFAULT_TIMEOUT)
    }
}
