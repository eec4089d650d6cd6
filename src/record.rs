use std::borrow::Cow;

/// A single domain entity selected for bulk processing.
///
/// Records expose a stable key that handlers receive instead of the record
/// itself, so actions stay decoupled from however the host materializes its
/// data. The display labels feed summary notices; the defaults derive from
/// the type name.
pub trait Record {
    /// Stable identifier handed to handlers and queue tasks.
    type Key: Clone + Send + 'static;

    fn key(&self) -> Self::Key;

    /// Singular display label. Defaults to the short type name.
    fn singular_label() -> Cow<'static, str>
    where
        Self: Sized,
    {
        Cow::Borrowed(short_type_name::<Self>())
    }

    /// Plural display label. Defaults to the singular label plus "s".
    fn plural_label() -> Cow<'static, str>
    where
        Self: Sized,
    {
        Cow::Owned(format!("{}s", Self::singular_label()))
    }
}

/// Title-cased label for a processed batch: singular for exactly one record,
/// plural otherwise.
pub(crate) fn batch_label<R: Record>(count: usize) -> String {
    let label = if count == 1 {
        R::singular_label()
    } else {
        R::plural_label()
    };
    title_case(&label)
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Uppercases the first letter of each whitespace-separated word.
pub(crate) fn title_case(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shipment {
        pk: u64,
    }

    impl Record for Shipment {
        type Key = u64;

        fn key(&self) -> u64 {
            self.pk
        }
    }

    struct Parcel {
        pk: u64,
    }

    impl Record for Parcel {
        type Key = u64;

        fn key(&self) -> u64 {
            self.pk
        }

        fn singular_label() -> Cow<'static, str> {
            Cow::Borrowed("registered parcel")
        }
    }

    #[test]
    fn test_label_falls_back_to_type_name() {
        assert_eq!(Shipment::singular_label(), "Shipment");
        assert_eq!(Shipment::plural_label(), "Shipments");
    }

    #[test]
    fn test_batch_label_matches_count() {
        assert_eq!(batch_label::<Shipment>(1), "Shipment");
        assert_eq!(batch_label::<Shipment>(2), "Shipments");
    }

    #[test]
    fn test_explicit_labels_are_title_cased() {
        assert_eq!(batch_label::<Parcel>(1), "Registered Parcel");
        assert_eq!(batch_label::<Parcel>(3), "Registered Parcels");
    }

    #[test]
    fn test_key_is_exposed() {
        let shipment = Shipment { pk: 17 };
        assert_eq!(shipment.key(), 17);
    }
}
