pub mod articles;
pub mod modules;
pub mod serde_time;

pub use articles::{ArticleDto, ArticleListItemDto, ArticleSlugDto, PublicArticleDto};
pub use modules::{
    AdminModuleNodeDto, ArticleLinkDto, ModuleDto, ModuleSummaryDto, PublicModuleNodeDto,
};
