use sea_orm::{Set, prelude::DateTimeWithTimeZone};

use crate::{
    db::{
        dao::{DaoBase, MenuDao},
        entities::menu,
    },
    error::AppError,
};

#[derive(Debug, Clone)]
pub struct NewMenu {
    pub name: String,
    pub category: String,
    pub start_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
}

#[derive(Debug, Clone, Default)]
pub struct MenuPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
}

/// A menu window must open strictly before it closes.
pub fn check_window(
    start: Option<DateTimeWithTimeZone>,
    end: Option<DateTimeWithTimeZone>,
) -> Result<(), AppError> {
    match (start, end) {
        (Some(start), Some(end)) if start >= end => Err(AppError::bad_request(
            "kindly retype the time: start_date must be before end_date",
        )),
        _ => Ok(()),
    }
}

#[derive(Clone)]
pub struct MenuService {
    menu_dao: MenuDao,
}

impl MenuService {
    pub fn new(menu_dao: MenuDao) -> Self {
        Self { menu_dao }
    }

    pub async fn list(&self) -> Result<Vec<menu::Model>, AppError> {
        Ok(self.menu_dao.list_all().await?)
    }

    pub async fn get(&self, menu_id: &str) -> Result<menu::Model, AppError> {
        Ok(self.menu_dao.find_by_key(menu_id).await?)
    }

    pub async fn create(&self, input: NewMenu) -> Result<menu::Model, AppError> {
        check_window(input.start_date, input.end_date)?;

        let model = menu::ActiveModel {
            name: Set(input.name),
            category: Set(input.category),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            ..Default::default()
        };
        Ok(self.menu_dao.create(model).await?)
    }

    pub async fn update(&self, menu_id: &str, patch: MenuPatch) -> Result<menu::Model, AppError> {
        let current = self.menu_dao.find_by_key(menu_id).await?;
        check_window(
            patch.start_date.or(current.start_date),
            patch.end_date.or(current.end_date),
        )?;

        let updated = self
            .menu_dao
            .update_by_key(menu_id, move |active| {
                if let Some(name) = patch.name {
                    active.name = Set(name);
                }
                if let Some(category) = patch.category {
                    active.category = Set(category);
                }
                if let Some(start) = patch.start_date {
                    active.start_date = Set(Some(start));
                }
                if let Some(end) = patch.end_date {
                    active.end_date = Set(Some(end));
                }
            })
            .await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset, TimeZone};

    use super::check_window;
    use crate::error::AppError;

    #[test]
    fn window_must_open_before_it_closes() {
        let start = FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("timestamp should be valid");

        assert!(check_window(Some(start), Some(start + Duration::hours(4))).is_ok());
        assert!(check_window(Some(start), None).is_ok());
        assert!(check_window(None, None).is_ok());
        assert!(matches!(
            check_window(Some(start), Some(start)),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            check_window(Some(start), Some(start - Duration::days(1))),
            Err(AppError::BadRequest(_))
        ));
    }
}
