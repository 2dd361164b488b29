// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::ExtractorSettings;
use crate::domain::models::epss::EpssScore;
use scraper::{ElementRef, Html, Node, Selector};
use thiserror::Error;
use tracing::debug;

/// 提取错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// 配置中的标签或 class 无法组成合法选择器
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
    /// 没有文本完全相等的标题
    #[error("EPSS section not found.")]
    SectionNotFound,
    /// 标题之后没有分数元素
    #[error("EPSS score span not found.")]
    ScoreNotFound,
}

/// EPSS 分数提取服务
///
/// 先按标签名和完全相等的文本定位标题，再沿文档顺序向后找到第一个
/// 带指定 class 的元素，取其文本。
///
/// 标题文本必须逐字相等，空白或标记上的任何差异都视为未找到。
#[derive(Debug)]
pub struct EpssExtractor {
    heading: Selector,
    heading_text: String,
    score: Selector,
}

impl EpssExtractor {
    /// 根据提取规则构建
    ///
    /// # 参数
    ///
    /// * `settings` - 标题标签、标题文本、分数标签和 class
    ///
    /// # 返回值
    ///
    /// * `Ok(EpssExtractor)` - 选择器全部合法
    /// * `Err(ExtractionError::InvalidSelector)` - 标签或 class 无法解析
    pub fn new(settings: &ExtractorSettings) -> Result<Self, ExtractionError> {
        let heading = parse_selector(&settings.heading_tag)?;
        let score = parse_selector(&format!("{}.{}", settings.score_tag, settings.score_class))?;

        Ok(Self {
            heading,
            heading_text: settings.heading_text.clone(),
            score,
        })
    }

    /// 从 HTML 中提取分数
    ///
    /// 纯函数，同样的输入总是得到同样的结果
    pub fn extract(&self, html_content: &str) -> Result<EpssScore, ExtractionError> {
        let document = Html::parse_document(html_content);

        let heading = self
            .find_heading(&document)
            .ok_or(ExtractionError::SectionNotFound)?;
        debug!("EPSS heading located");

        let score = self
            .find_score_after(&document, heading)
            .ok_or(ExtractionError::ScoreNotFound)?;

        Ok(EpssScore::from_text(&score.text().collect::<String>()))
    }

    /// 第一个字符串内容与标题文本完全相等的标题元素
    fn find_heading<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document
            .select(&self.heading)
            .find(|element| string_content(*element) == Some(self.heading_text.as_str()))
    }

    /// 标题之后（含标题自身的后代）第一个匹配分数选择器的元素
    fn find_score_after<'a>(
        &self,
        document: &'a Html,
        heading: ElementRef<'a>,
    ) -> Option<ElementRef<'a>> {
        document
            .tree
            .root()
            .descendants()
            .skip_while(|node| node.id() != heading.id())
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|element| self.score.matches(element))
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// 元素的单一字符串内容
///
/// 只有当元素恰好有一个子节点，且该子节点是文本或本身也有单一字符串内容的元素时
/// 才有值；混合内容的元素返回 `None`。
fn string_content(element: ElementRef<'_>) -> Option<&str> {
    let mut children = element.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }

    match only.value() {
        Node::Text(text) => Some(&**text),
        Node::Element(_) => ElementRef::wrap(only).and_then(string_content),
        _ => None,
    }
}

#[cfg(test)]
#[path = "epss_extractor_test.rs"]
mod tests;
