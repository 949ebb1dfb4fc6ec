use lazyval::*;
use std::cell::Cell;

const GUID_A: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";
const ERR: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";

#[test]
fn test_get_value_loads_once_and_flips_loaded() {
    let calls = Cell::new(0);
    let mut lazy = LazyValue::new(|| {
        calls.set(calls.get() + 1);
        Ok::<_, &str>(GUID_A.to_owned())
    });

    assert!(!lazy.is_value_loaded());

    assert_eq!(lazy.get_value().unwrap(), GUID_A);
    assert_eq!(calls.get(), 1);
    assert!(lazy.is_value_loaded());

    assert_eq!(lazy.get_value().unwrap(), GUID_A);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_every_accessor_returns_cached_value_after_load() {
    let calls = Cell::new(0);
    let mut lazy = LazyValue::new(|| {
        calls.set(calls.get() + 1);
        Ok::<_, &str>(GUID_A.to_owned())
    });

    lazy.get_value().unwrap();

    assert_eq!(lazy.get_value_without_loading().unwrap(), GUID_A);
    assert_eq!(lazy.try_get_value().unwrap(), GUID_A);
    assert_eq!(lazy.get_value().unwrap(), GUID_A);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_get_value_propagates_failure_and_retries() {
    let calls = Cell::new(0);
    let mut lazy: LazyValue<String, _> = LazyValue::new(|| {
        calls.set(calls.get() + 1);
        Err(ERR)
    });

    for i in 1..=10 {
        assert_eq!(lazy.get_value(), Err(ERR));
        assert_eq!(calls.get(), i);
        assert!(!lazy.is_value_loaded());
    }
}

#[test]
fn test_get_value_preserves_producer_error_type() {
    #[derive(Debug, PartialEq)]
    enum FetchError {
        Timeout { after_ms: u64 },
    }

    let mut lazy: LazyValue<u32, _> =
        LazyValue::new(|| Err(FetchError::Timeout { after_ms: 250 }));

    assert_eq!(
        lazy.get_value(),
        Err(FetchError::Timeout { after_ms: 250 })
    );
}

#[test]
fn test_get_value_without_loading_before_load() {
    let calls = Cell::new(0);
    let lazy = LazyValue::new(|| {
        calls.set(calls.get() + 1);
        Ok::<_, &str>(GUID_A)
    });

    let err = lazy.get_value_without_loading().unwrap_err();
    assert_eq!(err, NotLoadedError);
    assert_eq!(calls.get(), 0);
    assert!(!lazy.is_value_loaded());
}

#[test]
fn test_get_value_without_loading_after_failed_load() {
    let mut lazy: LazyValue<u8, _> = LazyValue::new(|| Err(ERR));

    assert!(lazy.get_value().is_err());
    assert_eq!(lazy.get_value_without_loading(), Err(NotLoadedError));
}

#[test]
fn test_try_get_value_success_is_cached() {
    let calls = Cell::new(0);
    let mut lazy = LazyValue::new(|| {
        calls.set(calls.get() + 1);
        Ok::<_, &str>(GUID_A)
    });

    assert_eq!(lazy.try_get_value(), Ok(&GUID_A));
    assert!(lazy.is_value_loaded());
    assert_eq!(lazy.try_get_value(), Ok(&GUID_A));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_try_get_value_failure_carries_message() {
    let calls = Cell::new(0);
    let mut lazy: LazyValue<String, _> = LazyValue::new(|| {
        calls.set(calls.get() + 1);
        Err(ERR)
    });

    for i in 1..=5 {
        let err = lazy.try_get_value().unwrap_err();
        assert_eq!(err.message(), ERR);
        assert_eq!(calls.get(), i);
        assert!(!lazy.is_value_loaded());
    }
}

#[test]
fn test_try_get_value_with_anyhow_context() {
    use anyhow::Context;

    let mut lazy: LazyValue<u16, _> = LazyValue::new(|| {
        "not a port"
            .parse::<u16>()
            .context("reading port")
    });

    let err = lazy.try_get_value().unwrap_err();
    assert_eq!(err.message(), "reading port");
    assert_eq!(err.to_string(), "failed to load lazy value: reading port");
}

#[test]
fn test_recovers_after_transient_failures() {
    let calls = Cell::new(0);
    let mut lazy = LazyValue::new(|| {
        calls.set(calls.get() + 1);
        if calls.get() <= 2 {
            Err(ERR)
        } else {
            Ok(GUID_A)
        }
    });

    assert!(lazy.try_get_value().is_err());
    assert!(lazy.get_value().is_err());
    assert_eq!(lazy.get_value(), Ok(&GUID_A));
    assert!(lazy.is_value_loaded());
    assert_eq!(lazy.try_get_value(), Ok(&GUID_A));
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_readonly_view_cannot_load() {
    let calls = Cell::new(0);
    let mut lazy = LazyValue::from_fn(|| {
        calls.set(calls.get() + 1);
        GUID_A
    });

    fn inspect(view: &impl ReadonlyLazy<&'static str>) -> Option<&'static str> {
        view.get_value_without_loading().ok().copied()
    }

    assert_eq!(inspect(&lazy.as_readonly()), None);
    assert_eq!(calls.get(), 0);

    lazy.get();

    assert_eq!(inspect(&lazy.as_readonly()), Some(GUID_A));
    assert_eq!(inspect(&lazy), Some(GUID_A));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_lazy_trait_object() {
    let mut lazy = LazyValue::new(|| Ok::<_, NotLoadedError>(3.5f64));
    let full: &mut dyn Lazy<f64, Error = NotLoadedError> = &mut lazy;

    assert!(!full.is_value_loaded());
    assert_eq!(full.try_get_value(), Ok(&3.5));
    assert!(full.is_value_loaded());
}

#[test]
fn test_producer_dropped_with_holder() {
    use std::rc::Rc;

    let resource = Rc::new(());
    let captured = Rc::clone(&resource);
    let mut lazy = LazyValue::from_fn(move || Rc::strong_count(&captured));

    assert_eq!(*lazy.get(), 2);
    assert_eq!(lazy.into_value(), Some(2));
    assert_eq!(Rc::strong_count(&resource), 1);
}
