use sea_orm::{ActiveValue, Value};

pub fn set_option<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<Value>,
{
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_leaves_column_untouched() {
        assert!(matches!(set_option::<i32>(None), ActiveValue::NotSet));
        assert!(matches!(set_option(Some(3)), ActiveValue::Set(3)));
    }
}
