use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_MODULE: &str = "articles_module_id_fkey";
const CNT_MODULE_PARENT: &str = "modules_parent_id_fkey";
const CNT_MODULE_SELF_PARENT: &str = "modules_not_self_parent_chk";
const CNT_MODULE_NAME: &str = "modules_name_not_blank_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_ARTICLE_SLUG => DomainError::Conflict("slug already exists".into()),
        CNT_ARTICLE_MODULE => DomainError::NotFound("module not found".into()),
        CNT_MODULE_PARENT => DomainError::NotFound("parent module not found".into()),
        CNT_MODULE_SELF_PARENT => DomainError::Cycle("module cannot be its own parent".into()),
        CNT_MODULE_NAME => DomainError::Validation("module name is required".into()),
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}
