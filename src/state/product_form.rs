//! Create/edit product form backing the admin overlay.
//!
//! DESIGN
//! ======
//! The form owns every input as plain data: text fields, the digits-only
//! price, two independent tag lists, and the image slot. Submission builds a
//! fully canonical payload from that data alone.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use crate::config::{FieldLimits, Messages};
use crate::net::types::{Product, ProductPayload};
use crate::state::image_source::ImageSource;
use crate::state::tag_list::TagList;
use crate::util::price::{canonical_price, digits_only, parse_price_num};
use crate::util::sanitize::safe_link_url;

/// Whether submit creates a new product or updates an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn success_message(self, messages: &Messages) -> &str {
        match self {
            Self::Create => &messages.create_success,
            Self::Edit(_) => &messages.update_success,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("name, category, and description are required")]
    MissingRequired,
}

/// Free-text inputs, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Name,
    Category,
    Code,
    Description,
    DetailedDescription,
    DownloadUrl,
}

impl TextField {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Category,
        Self::Code,
        Self::Description,
        Self::DetailedDescription,
        Self::DownloadUrl,
    ];

    /// Form control `name`, matching the wire key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Code => "code",
            Self::Description => "description",
            Self::DetailedDescription => "detailedDescription",
            Self::DownloadUrl => "downloadUrl",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "제품명 *",
            Self::Category => "카테고리 *",
            Self::Code => "제품 코드",
            Self::Description => "간단 설명 *",
            Self::DetailedDescription => "상세 설명",
            Self::DownloadUrl => "다운로드 URL",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Description | Self::DetailedDescription)
    }

    pub fn max_len(self, limits: &FieldLimits) -> u32 {
        match self {
            Self::Name => limits.name,
            Self::Category => limits.category,
            Self::Code => limits.code,
            Self::Description => limits.description,
            Self::DetailedDescription => limits.detailed_description,
            Self::DownloadUrl => limits.download_url,
        }
    }
}

/// The two chip lists on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagField {
    Specs,
    Features,
}

impl TagField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Specs => "사양",
            Self::Features => "주요 기능",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Specs => "예: Android 6.0 이상",
            Self::Features => "예: 실시간 PvP",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub mode: FormMode,
    pub name: String,
    pub category: String,
    pub code: String,
    pub description: String,
    pub detailed_description: String,
    pub download_url: String,
    price: String,
    pub specs: TagList,
    pub features: TagList,
    pub image: ImageSource,
}

impl ProductForm {
    /// Blank form.
    pub fn for_create() -> Self {
        Self::default()
    }

    /// Form filled from a snapshot, price normalized to its digit form.
    pub fn for_edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit(product.id),
            name: product.name.clone(),
            category: product.category.clone(),
            code: product.code.clone(),
            description: product.description.clone(),
            detailed_description: product.detailed_description.clone(),
            download_url: product.download_url.clone(),
            price: parse_price_num(&product.price).to_string(),
            specs: TagList::from_values(product.specs.iter().cloned()),
            features: TagList::from_values(product.features.iter().cloned()),
            image: ImageSource::from_existing(&product.image),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "제품 추가",
            FormMode::Edit(_) => "제품 수정",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "추가",
            FormMode::Edit(_) => "수정",
        }
    }

    pub fn success_message<'a>(&self, messages: &'a Messages) -> &'a str {
        self.mode.success_message(messages)
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Category => &self.category,
            TextField::Code => &self.code,
            TextField::Description => &self.description,
            TextField::DetailedDescription => &self.detailed_description,
            TextField::DownloadUrl => &self.download_url,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: String) {
        let slot = match field {
            TextField::Name => &mut self.name,
            TextField::Category => &mut self.category,
            TextField::Code => &mut self.code,
            TextField::Description => &mut self.description,
            TextField::DetailedDescription => &mut self.detailed_description,
            TextField::DownloadUrl => &mut self.download_url,
        };
        *slot = value;
    }

    pub fn tags(&self, field: TagField) -> &TagList {
        match field {
            TagField::Specs => &self.specs,
            TagField::Features => &self.features,
        }
    }

    pub fn tags_mut(&mut self, field: TagField) -> &mut TagList {
        match field {
            TagField::Specs => &mut self.specs,
            TagField::Features => &mut self.features,
        }
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    /// Keystroke handler for the price input: digits only.
    pub fn set_price_input(&mut self, raw: &str) {
        self.price = digits_only(raw);
    }

    /// Validate required fields and build the request body.
    ///
    /// # Errors
    ///
    /// [`FormError::MissingRequired`] if name, category, or description is
    /// blank after trimming.
    pub fn to_payload(&self) -> Result<ProductPayload, FormError> {
        let name = self.name.trim();
        let category = self.category.trim();
        let description = self.description.trim();
        if name.is_empty() || category.is_empty() || description.is_empty() {
            return Err(FormError::MissingRequired);
        }
        Ok(ProductPayload {
            name: name.to_owned(),
            category: category.to_owned(),
            description: description.to_owned(),
            detailed_description: self.detailed_description.trim().to_owned(),
            code: self.code.trim().to_owned(),
            image: self.image.submission_value(),
            price: canonical_price(&self.price),
            download_url: safe_link_url(&self.download_url),
            specs: self.specs.values(),
            features: self.features.values(),
        })
    }
}
