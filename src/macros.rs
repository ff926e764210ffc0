// src/macros.rs
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn builds_owned_strings() {
        let stem = s!("top_chart");
        assert_eq!(s!(), "");
        assert_eq!(join!(&stem, ".", "csv",), "top_chart.csv");
        assert_eq!(join!("<", "script"), "<script");
    }
}
