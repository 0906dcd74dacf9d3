//! Riksdagen dokumentlista models and queries.
//!
//! Field names follow the upstream API. Metadata keys prefixed with `@` are
//! renamed on both decode and encode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::loose::{one_or_many, LooseString};

pub const DEFAULT_SORT: &str = "rel";
const JSON_OUTPUT: &str = "json";

/// `avd` parameter of the dokumentlista API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Dokument,
    Ledamot,
    Kalender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

// ─────────────────────── queries ───────────────────────

/// Filters for `avd=dokument` and `avd=kalender` listings.
#[derive(Debug, Clone, Serialize)]
pub struct DokumentQuery {
    avd: Section,
    /// Document type code, e.g. `mot`, `prop`, `bet`.
    pub doktyp: Option<String>,
    /// Free text.
    pub sok: Option<String>,
    /// Riksmöte, e.g. `2023/24`.
    pub rm: Option<String>,
    /// From-date `YYYY-MM-DD`.
    pub datum: Option<String>,
    /// To-date `YYYY-MM-DD`.
    pub tom: Option<String>,
    #[serde(rename = "org")]
    pub organ: Option<String>,
    pub sort: String,
    pub sortorder: SortOrder,
    utformat: &'static str,
}

impl DokumentQuery {
    pub fn documents() -> Self {
        Self::for_section(Section::Dokument)
    }

    pub fn calendar() -> Self {
        Self::for_section(Section::Kalender)
    }

    fn for_section(avd: Section) -> Self {
        Self {
            avd,
            doktyp: None,
            sok: None,
            rm: None,
            datum: None,
            tom: None,
            organ: None,
            sort: DEFAULT_SORT.to_string(),
            sortorder: SortOrder::default(),
            utformat: JSON_OUTPUT,
        }
    }

    pub fn section(&self) -> Section {
        self.avd
    }
}

/// Filters for `avd=ledamot` listings.
#[derive(Debug, Clone, Serialize)]
pub struct LedamotQuery {
    avd: Section,
    pub sok: Option<String>,
    pub datum: Option<String>,
    pub tom: Option<String>,
    pub sort: String,
    pub sortorder: SortOrder,
    /// 1-based page.
    pub p: Option<u32>,
    pub pagesize: Option<u32>,
    utformat: &'static str,
}

impl Default for LedamotQuery {
    fn default() -> Self {
        Self {
            avd: Section::Ledamot,
            sok: None,
            datum: None,
            tom: None,
            sort: DEFAULT_SORT.to_string(),
            sortorder: SortOrder::default(),
            p: None,
            pagesize: None,
            utformat: JSON_OUTPUT,
        }
    }
}

// ─────────────────────── dokument ───────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SokData {
    pub brodsmula: Option<LooseString>,
    pub kalenderprio: Option<LooseString>,
    pub pari_kod: Option<LooseString>,
    pub parti_epost: Option<LooseString>,
    pub parti_logotyp_img_alt: Option<LooseString>,
    pub parti_logotyp_img_id: Option<LooseString>,
    pub parti_logotyp_img_url: Option<LooseString>,
    pub parti_mandat: Option<LooseString>,
    pub parti_namn: Option<LooseString>,
    pub parti_telefon: Option<LooseString>,
    pub parti_telefontider: Option<LooseString>,
    pub parti_website_namn: Option<LooseString>,
    pub parti_website_url: Option<LooseString>,
    pub soktyp: Option<LooseString>,
    pub statusrad: Option<LooseString>,
    pub titel: Option<LooseString>,
    pub undertitel: Option<LooseString>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Avdelningar {
    #[serde(default, deserialize_with = "one_or_many")]
    pub avdelning: Option<Vec<LooseString>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CmsKategori {
    pub kod: Option<LooseString>,
    pub namn: Option<LooseString>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CmsKategorier {
    #[serde(default, deserialize_with = "one_or_many")]
    pub cmskategori: Option<Vec<CmsKategori>>,
}

/// One hit in a dokumentlista. Unknown upstream fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dokument {
    pub ardometype: Option<LooseString>,
    pub audio: Option<LooseString>,
    pub avdelningar: Option<Avdelningar>,
    pub beredningsdag: Option<LooseString>,
    pub beslutad: Option<LooseString>,
    pub beslutsdag: Option<LooseString>,
    pub beteckning: Option<LooseString>,
    pub cmskategorier: Option<CmsKategorier>,
    pub database: Option<LooseString>,
    pub datum: Option<LooseString>,
    pub debatt: Option<LooseString>,
    pub debattdag: Option<LooseString>,
    pub debattgrupp: Option<LooseString>,
    pub debattnamn: Option<LooseString>,
    pub debattsekunder: Option<LooseString>,
    pub dok_id: Option<LooseString>,
    pub doktyp: Option<LooseString>,
    pub dokument_url_html: Option<LooseString>,
    pub dokument_url_text: Option<LooseString>,
    pub dokumentformat: Option<LooseString>,
    pub dokumentnamn: Option<LooseString>,
    pub domain: Option<LooseString>,
    pub id: Option<LooseString>,
    pub inlamnad: Option<LooseString>,
    pub justeringsdag: Option<LooseString>,
    pub kalla: Option<LooseString>,
    pub lang: Option<LooseString>,
    pub motionstid: Option<LooseString>,
    pub notis: Option<LooseString>,
    pub notisrubrik: Option<LooseString>,
    pub nummer: Option<LooseString>,
    pub organ: Option<LooseString>,
    pub publicerad: Option<LooseString>,
    pub relaterat_id: Option<LooseString>,
    pub relurl: Option<LooseString>,
    pub reservationer: Option<LooseString>,
    pub rm: Option<LooseString>,
    pub score: Option<LooseString>,
    pub sokdata: Option<SokData>,
    pub status: Option<LooseString>,
    pub struktur: Option<LooseString>,
    pub subtyp: Option<LooseString>,
    pub summary: Option<LooseString>,
    pub systemdatum: Option<LooseString>,
    pub tempbeteckning: Option<LooseString>,
    pub tilldelat: Option<LooseString>,
    pub titel: Option<LooseString>,
    pub traff: Option<LooseString>,
    pub typ: Option<LooseString>,
    pub undertitel: Option<LooseString>,
    pub url: Option<LooseString>,
    pub video: Option<LooseString>,
}

/// Body of `dokumentlista` for `avd=dokument` and `avd=kalender`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DokumentLista {
    #[serde(rename = "@datum", default)]
    pub datum: Option<LooseString>,
    #[serde(rename = "@ms", default)]
    pub ms: Option<LooseString>,
    #[serde(rename = "@nasta_sida", default)]
    pub nasta_sida: Option<LooseString>,
    #[serde(rename = "@q", default)]
    pub q: Option<LooseString>,
    #[serde(rename = "@sida", default)]
    pub sida: Option<LooseString>,
    #[serde(rename = "@sidor", default)]
    pub sidor: Option<LooseString>,
    #[serde(rename = "@traff_fran", default)]
    pub traff_fran: Option<LooseString>,
    #[serde(rename = "@traff_till", default)]
    pub traff_till: Option<LooseString>,
    #[serde(rename = "@traffar", default)]
    pub traffar: Option<LooseString>,
    #[serde(rename = "@varning", default)]
    pub varning: Option<LooseString>,
    #[serde(rename = "@version", default)]
    pub version: Option<LooseString>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub dokument: Option<Vec<Dokument>>,
}

/// Single-document JSON. The layout varies by doktyp, so only `dokument` is
/// named and the remaining keys are carried through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DokumentDetalj {
    #[serde(default)]
    pub dokument: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ─────────────────────── ledamot ───────────────────────

/// Key/value detail attached to a person.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Uppgift {
    pub kod: Option<LooseString>,
    pub uppgift: Option<LooseString>,
    pub typ: Option<LooseString>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonUppgift {
    #[serde(default, deserialize_with = "one_or_many")]
    pub uppgift: Option<Vec<Uppgift>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A role held by a member in some organ.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Uppdrag {
    pub organ_kod: Option<LooseString>,
    pub roll_kod: Option<LooseString>,
    pub roll_kod_en: Option<LooseString>,
    pub ordningsnummer: Option<LooseString>,
    pub status: Option<LooseString>,
    pub typ: Option<LooseString>,
    pub from: Option<LooseString>,
    pub tom: Option<LooseString>,
    pub uppgift: Option<LooseString>,
    pub uppgift_en: Option<LooseString>,
    pub organ_sortering: Option<LooseString>,
    pub sortering: Option<LooseString>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonUppdrag {
    #[serde(default, deserialize_with = "one_or_many")]
    pub uppdrag: Option<Vec<Uppdrag>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A dokumentlista hit for `avd=ledamot`. Extra upstream fields are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedamotItem {
    pub traff: Option<LooseString>,
    pub domain: Option<LooseString>,
    pub database: Option<LooseString>,
    pub datum: Option<LooseString>,
    pub id: Option<LooseString>,
    pub publicerad: Option<LooseString>,
    pub systemdatum: Option<LooseString>,
    pub undertitel: Option<LooseString>,
    pub kalla: Option<LooseString>,
    pub kall_id: Option<LooseString>,
    pub lang: Option<LooseString>,
    pub url: Option<LooseString>,
    pub relurl: Option<LooseString>,
    pub titel: Option<LooseString>,
    pub status: Option<LooseString>,
    pub score: Option<LooseString>,
    pub struktur: Option<LooseString>,
    pub debattnamn: Option<LooseString>,
    pub dokumentnamn: Option<LooseString>,
    pub sokdata: Option<Map<String, Value>>,
    pub avdelning: Option<LooseString>,
    pub avdelningar: Option<Avdelningar>,
    pub parti: Option<LooseString>,
    pub efternamn: Option<LooseString>,
    pub tilltalsnamn: Option<LooseString>,
    pub bokstav: Option<LooseString>,
    pub iort: Option<LooseString>,
    pub fodd_ar: Option<LooseString>,
    pub valkrets: Option<LooseString>,
    pub personuppgift: Option<PersonUppgift>,
    pub personuppdrag: Option<PersonUppdrag>,
    pub summary: Option<LooseString>,
    pub notisrubrik: Option<LooseString>,
    pub notis: Option<LooseString>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `dokumentlista` for `avd=ledamot`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedamotLista {
    #[serde(rename = "@ms", default)]
    pub ms: Option<LooseString>,
    #[serde(rename = "@version", default)]
    pub version: Option<LooseString>,
    #[serde(rename = "@q", default)]
    pub q: Option<LooseString>,
    #[serde(rename = "@varning", default)]
    pub varning: Option<LooseString>,
    #[serde(rename = "@datum", default)]
    pub datum: Option<LooseString>,
    #[serde(rename = "@nasta_sida", default)]
    pub nasta_sida: Option<LooseString>,
    #[serde(rename = "@sida", default)]
    pub sida: Option<LooseString>,
    #[serde(rename = "@sidor", default)]
    pub sidor: Option<LooseString>,
    #[serde(rename = "@traff_fran", default)]
    pub traff_fran: Option<LooseString>,
    #[serde(rename = "@traff_till", default)]
    pub traff_till: Option<LooseString>,
    #[serde(rename = "@traffar", default)]
    pub traffar: Option<LooseString>,
    pub facettlista: Option<Value>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub dokument: Option<Vec<LedamotItem>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
