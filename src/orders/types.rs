//! Core enums shared across the order catalogue and generation pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::OrderError;

/// Language an order is rendered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    #[default]
    English,
    Welsh,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Welsh => "welsh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "welsh" | "cy" => Ok(Language::Welsh),
            _ => Err(OrderError::invalid(format!("unknown language '{s}'"))),
        }
    }
}

/// Whether the rendered order carries a draft watermark, a court seal or neither
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Sealed,
    Draft,
    Plain,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Sealed => write!(f, "sealed"),
            OrderStatus::Draft => write!(f, "draft"),
            OrderStatus::Plain => write!(f, "plain"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sealed" => Ok(OrderStatus::Sealed),
            "draft" => Ok(OrderStatus::Draft),
            "plain" => Ok(OrderStatus::Plain),
            _ => Err(OrderError::invalid(format!("unknown order status '{s}'"))),
        }
    }
}

/// Output file format of a rendered order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenderFormat {
    Pdf,
    Word,
    /// Local proof output; never requested from Docmosis or accepted as an upload
    Html,
}

impl RenderFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            RenderFormat::Pdf => "pdf",
            RenderFormat::Word => "docx",
            RenderFormat::Html => "html",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            RenderFormat::Pdf => "application/pdf",
            RenderFormat::Word => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            RenderFormat::Html => "text/html",
        }
    }

    /// Infer the format of an uploaded file from its extension
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_lowercase().as_str() {
            "pdf" => Some(RenderFormat::Pdf),
            "doc" | "docx" => Some(RenderFormat::Word),
            _ => None,
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for RenderFormat {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(RenderFormat::Pdf),
            "word" | "docx" | "doc" => Ok(RenderFormat::Word),
            _ => Err(OrderError::invalid(format!("unknown render format '{s}'"))),
        }
    }
}

/// How an order's content is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSourceType {
    /// Generated from structured answers
    Digital,
    /// A user-provided file that is sealed or converted
    ManualUpload,
}

/// Question blocks shown to collect an order's inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderQuestionBlock {
    Approver,
    ApprovalDate,
    ApprovalDateTime,
    WhichChildren,
    Details,
    DischargeDetails,
    EpoTypeAndPreventRemoval,
    EpoIncludePhrase,
    EpoChildrenDescription,
    EpoExpiryDate,
    FurtherDirections,
    ManageOrderEndDateWithMonth,
    ManageOrderEndDateWithEndOfProceedings,
    UploadOrderFile,
    NeedSealing,
    CloseCase,
    ReviewDraftOrder,
}

/// Physical template layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocmosisTemplate {
    OrderV2,
    EpoV2,
}

impl DocmosisTemplate {
    /// Template file name registered with the rendering service
    pub fn template_name(&self, language: Language) -> &'static str {
        match (self, language) {
            (DocmosisTemplate::OrderV2, Language::English) => "FL-PLW-GOR-ENG-00728.doc",
            (DocmosisTemplate::OrderV2, Language::Welsh) => "FL-PLW-GOR-WEL-00728.doc",
            (DocmosisTemplate::EpoV2, Language::English) => "FL-PLW-GOR-ENG-00744.doc",
            (DocmosisTemplate::EpoV2, Language::Welsh) => "FL-PLW-GOR-WEL-00744.doc",
        }
    }

    /// Name of the HTML proof template for local previews
    pub fn proof_name(&self) -> &'static str {
        match self {
            DocmosisTemplate::OrderV2 => "order-v2.html",
            DocmosisTemplate::EpoV2 => "epo-v2.html",
        }
    }
}

/// Images stamped onto rendered orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocmosisImage {
    DraftWatermark,
    CourtSeal,
    Crest,
}

impl DocmosisImage {
    pub fn value(&self, language: Language) -> &'static str {
        match (self, language) {
            (DocmosisImage::DraftWatermark, _) => "[userImage:draft-watermark.png]",
            (DocmosisImage::CourtSeal, Language::English) => "[userImage:familycourtseal.png]",
            (DocmosisImage::CourtSeal, Language::Welsh) => {
                "[userImage:familycourtseal-bilingual.png]"
            }
            (DocmosisImage::Crest, _) => "[userImage:crest.png]",
        }
    }
}

/// CCD Yes/No answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(answer: Option<YesNo>) -> bool {
        answer == Some(YesNo::Yes)
    }
}
