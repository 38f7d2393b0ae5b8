#[macro_export]
macro_rules! sort_param {
    // Handle a block of field declarations
    ( $( $name:expr => { $($opts:tt)* } ),* $(,)? ) => {{
        let definition = $crate::Definition::new();
        $(
            let definition = definition.field($name, $crate::sort_param!(@options $($opts)*));
        )*
        definition
    }};

    // Handle an empty options block
    (@options) => {
        $crate::FieldOptions::new()
    };

    // Handle option entries
    (@options $($key:ident : $value:tt),+ $(,)?) => {{
        let options = $crate::FieldOptions::new();
        $(
            let options = $crate::sort_param!(@option options, $key : $value);
        )+
        options
    }};

    (@option $options:ident, nulls : first) => {
        $options.nulls($crate::NullOrdering::First)
    };
    (@option $options:ident, nulls : last) => {
        $options.nulls($crate::NullOrdering::Last)
    };
    (@option $options:ident, rename : $value:expr) => {
        $options.rename($value)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Mode, NullOrdering};

    #[test]
    fn test_macro_declares_fields() {
        let definition = sort_param! {
            "first_name" => { nulls: last, rename: "users.first_name" },
            "users.last_name" => { nulls: first },
            "users.email" => {},
        };

        assert_eq!(definition.len(), 3);
        assert_eq!(
            definition.field_defaults("first_name").unwrap().rename.as_deref(),
            Some("users.first_name"),
        );
        assert_eq!(
            definition.field_defaults("users.last_name").unwrap().nulls,
            Some(NullOrdering::First),
        );
        assert_eq!(
            definition.field_defaults("users.email").unwrap(),
            Default::default(),
        );
    }

    #[test]
    fn test_macro_definition_loads() {
        let definition = sort_param! {
            "email" => {},
        };

        let output = definition.load("-email", Mode::Postgres).unwrap();
        assert_eq!(output.as_sql(), Some("email desc"));
    }
}
