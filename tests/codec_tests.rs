//! Integration tests for the typed codec and the registry.

use datastring::{
    decode, decode_with_options, encode, from_str, from_str_with_options, parse, to_string,
    BigFloat, BinaryBase, BitString, CodecOptions, DataStringEncodable, Error, Registry, Schema,
    TypeKind,
};
use num_bigint::BigInt;

fn set_u8(slot: &mut u8, value: &BigInt) -> bool {
    u8::try_from(value).map(|v| *slot = v).is_ok()
}

fn set_i64(slot: &mut i64, value: &BigInt) -> bool {
    i64::try_from(value).map(|v| *slot = v).is_ok()
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl DataStringEncodable for Rgb {
    fn schema() -> Schema<Self> {
        Schema::<Self>::function("rgb")
            .integer("r", |c| Some(BigInt::from(c.r)), |c, v| set_u8(&mut c.r, v))
            .integer("g", |c| Some(BigInt::from(c.g)), |c, v| set_u8(&mut c.g, v))
            .integer("b", |c| Some(BigInt::from(c.b)), |c, v| set_u8(&mut c.b, v))
    }
}

#[derive(Debug, Default, PartialEq)]
struct Stroke {
    color: Rgb,
    width: BigFloat,
}

impl DataStringEncodable for Stroke {
    fn schema() -> Schema<Self> {
        Schema::<Self>::function("stroke")
            .nested::<Rgb>("color", |s| Some(&s.color), |s, c| s.color = c)
            .float("width", |s| Some(s.width.clone()), |s, v| {
                s.width = v.clone();
                true
            })
    }
}

#[derive(Debug, Default, PartialEq)]
struct Flags {
    mask: u32,
}

impl DataStringEncodable for Flags {
    fn schema() -> Schema<Self> {
        Schema::<Self>::function("flags").binary(
            "mask",
            BinaryBase::Hexadecimal,
            |f| BitString::from_bigint(&BigInt::from(f.mask)),
            |f, bits| u32::try_from(&bits.to_bigint()).map(|v| f.mask = v).is_ok(),
        )
    }
}

#[test]
fn test_encode_function_type() {
    let stroke = Stroke {
        color: Rgb { r: 255, g: 0, b: 0 },
        width: BigFloat::new(25, -1),
    };
    let item = encode(&stroke).unwrap();
    assert_eq!(item.to_string(), "stroke(rgb(255; 0; 0); 2.5)");
}

#[test]
fn test_decode_function_type() {
    let item = parse("stroke(rgb(255; 0; 0); 2.5)").unwrap();
    let stroke: Stroke = decode(&item.children()[0]).unwrap();
    assert_eq!(stroke.color, Rgb { r: 255, g: 0, b: 0 });
    assert_eq!(stroke.width, BigFloat::new(25, -1));
}

#[test]
fn test_float_field_accepts_integer_literal() {
    let stroke: Stroke = from_str("stroke(rgb(0; 0; 0); 2)").unwrap();
    assert_eq!(stroke.width, BigFloat::new(2, 0));
}

#[test]
fn test_binary_field_round_trip() {
    let flags = Flags { mask: 0xdead };
    let text = to_string(&flags).unwrap();
    assert_eq!(text, "flags(0xdead)");
    let back: Flags = from_str(&text).unwrap();
    assert_eq!(back, flags);
}

#[test]
fn test_wrong_function_name_is_type_mismatch() {
    let item = parse("hsl(0; 0; 0)").unwrap();
    let result: Result<Rgb, Error> = decode(&item.children()[0]);
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
}

#[test]
fn test_type_without_kind_is_attribute_expected() {
    #[derive(Debug, Default)]
    struct Bare;

    impl DataStringEncodable for Bare {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new()
        }
    }

    let result = encode(&Bare);
    assert!(matches!(result, Err(Error::AttributeExpected { .. })));
}

#[test]
fn test_type_with_two_kinds_is_invalid_context() {
    #[derive(Debug, Default)]
    struct Torn;

    impl DataStringEncodable for Torn {
        fn schema() -> Schema<Self> {
            Schema::<Self>::function("torn").kind(TypeKind::MainContext)
        }
    }

    let result = encode(&Torn);
    assert!(matches!(result, Err(Error::InvalidAttributeContext { .. })));
}

#[test]
fn test_field_with_two_kinds_is_invalid_context() {
    #[derive(Debug, Default)]
    struct Doubled {
        value: i64,
    }

    impl DataStringEncodable for Doubled {
        fn schema() -> Schema<Self> {
            Schema::<Self>::function("doubled")
                .integer(
                    "value",
                    |d| Some(BigInt::from(d.value)),
                    |d, v| set_i64(&mut d.value, v),
                )
                .string(
                    "value",
                    |d| d.value.to_string(),
                    |_, _| false,
                )
        }
    }

    let result = encode(&Doubled { value: 1 });
    assert!(matches!(result, Err(Error::InvalidAttributeContext { .. })));
}

#[test]
fn test_any_function_cannot_encode() {
    #[derive(Debug, Default)]
    struct Wild;

    impl DataStringEncodable for Wild {
        fn schema() -> Schema<Self> {
            Schema::<Self>::any_function(&[])
        }
    }

    let result = encode(&Wild);
    assert!(matches!(result, Err(Error::InvalidAttributeContext { .. })));
}

#[test]
fn test_explicit_parameter_indices_reorder_fields() {
    #[derive(Debug, Default, PartialEq)]
    struct Span {
        start: i64,
        end: i64,
    }

    impl DataStringEncodable for Span {
        fn schema() -> Schema<Self> {
            // Declared end-first, but indices put start at parameter 0.
            Schema::<Self>::function("span")
                .integer("end", |s| Some(BigInt::from(s.end)), |s, v| {
                    set_i64(&mut s.end, v)
                })
                .at(1)
                .integer("start", |s| Some(BigInt::from(s.start)), |s, v| {
                    set_i64(&mut s.start, v)
                })
                .at(0)
        }
    }

    let span = Span { start: 2, end: 7 };
    assert_eq!(to_string(&span).unwrap(), "span(2; 7)");
    assert_eq!(from_str::<Span>("span(2; 7)").unwrap(), span);
}

#[test]
fn test_sparse_ordering_indices_round_trip() {
    // Indices only order the fields; gaps do not leave holes in the
    // parameter list, so `0` and `5` occupy parameters 0 and 1.
    #[derive(Debug, Default, PartialEq)]
    struct Pair {
        a: i64,
        b: i64,
    }

    impl DataStringEncodable for Pair {
        fn schema() -> Schema<Self> {
            Schema::<Self>::function("pair")
                .integer("a", |p| Some(BigInt::from(p.a)), |p, v| {
                    set_i64(&mut p.a, v)
                })
                .at(0)
                .integer("b", |p| Some(BigInt::from(p.b)), |p, v| {
                    set_i64(&mut p.b, v)
                })
                .at(5)
        }
    }

    let pair = Pair { a: 1, b: 2 };
    let text = to_string(&pair).unwrap();
    assert_eq!(text, "pair(1; 2)");
    assert_eq!(from_str::<Pair>(&text).unwrap(), pair);

    let options = CodecOptions::new().strict();
    assert_eq!(
        from_str_with_options::<Pair>(&text, &options).unwrap(),
        pair
    );
}

#[test]
fn test_lenient_decode_skips_mismatched_values() {
    // The third parameter is a string; in lenient mode the field keeps its
    // default instead of failing.
    let rgb: Rgb = from_str("rgb(10; 20; 'blue')").unwrap();
    assert_eq!(rgb, Rgb { r: 10, g: 20, b: 0 });
}

#[test]
fn test_strict_decode_rejects_mismatched_values() {
    let options = CodecOptions::new().strict();
    let item = parse("rgb(10; 20; 'blue')").unwrap();
    let result: Result<Rgb, Error> = decode_with_options(&item.children()[0], &options);
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
}

#[test]
fn test_strict_decode_rejects_out_of_range_values() {
    let options = CodecOptions::new().strict();
    let result: Result<Rgb, Error> = from_str_with_options("rgb(300; 0; 0)", &options);
    assert!(matches!(result, Err(Error::ConversionFailed { .. })));

    let lenient: Rgb = from_str("rgb(300; 0; 0)").unwrap();
    assert_eq!(lenient.r, 0);
}

#[test]
fn test_registry_dispatches_by_name() {
    #[derive(Debug, Default, PartialEq)]
    struct Move {
        x: i64,
        y: i64,
    }

    #[derive(Debug, Default, PartialEq)]
    struct Close;

    #[derive(Debug, PartialEq)]
    enum Step {
        Move(Move),
        Close,
    }

    impl DataStringEncodable for Move {
        fn schema() -> Schema<Self> {
            Schema::<Self>::function("move")
                .integer("x", |m| Some(BigInt::from(m.x)), |m, v| set_i64(&mut m.x, v))
                .integer("y", |m| Some(BigInt::from(m.y)), |m, v| set_i64(&mut m.y, v))
        }
    }

    impl DataStringEncodable for Close {
        fn schema() -> Schema<Self> {
            Schema::<Self>::function("close")
        }
    }

    impl From<Move> for Step {
        fn from(value: Move) -> Self {
            Step::Move(value)
        }
    }

    impl From<Close> for Step {
        fn from(_: Close) -> Self {
            Step::Close
        }
    }

    let mut registry: Registry<Step> = Registry::new();
    registry.register::<Move>().unwrap();
    registry.register::<Close>().unwrap();

    let steps = registry.decode_all("move(3; 4); close()").unwrap();
    assert_eq!(steps, vec![Step::Move(Move { x: 3, y: 4 }), Step::Close]);

    let unknown = registry.decode_all("spin()");
    assert_eq!(
        unknown,
        Err(Error::UnknownFunction {
            name: "spin".to_string()
        })
    );

    let not_a_function = parse("42").unwrap();
    let result = registry.decode(&not_a_function.children()[0]);
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
}

#[test]
fn test_registry_rejects_duplicate_names() {
    #[derive(Debug, Default)]
    struct Also;

    impl DataStringEncodable for Also {
        fn schema() -> Schema<Self> {
            Schema::<Self>::function("rgb")
        }
    }

    #[derive(Debug)]
    enum Any {
        Color(Rgb),
        Other,
    }

    impl From<Rgb> for Any {
        fn from(value: Rgb) -> Self {
            Any::Color(value)
        }
    }

    impl From<Also> for Any {
        fn from(_: Also) -> Self {
            Any::Other
        }
    }

    let mut registry: Registry<Any> = Registry::new();
    registry.register::<Rgb>().unwrap();
    let result = registry.register::<Also>();
    assert!(matches!(result, Err(Error::InvalidAttributeContext { .. })));
}

#[test]
fn test_registry_fallback_catches_unknown_names() {
    #[derive(Debug, Default, PartialEq)]
    struct Raw;

    impl DataStringEncodable for Raw {
        fn schema() -> Schema<Self> {
            Schema::<Self>::any_function(&[])
        }
    }

    #[derive(Debug, PartialEq)]
    enum Any {
        Color(Rgb),
        Raw,
    }

    impl From<Rgb> for Any {
        fn from(value: Rgb) -> Self {
            Any::Color(value)
        }
    }

    impl From<Raw> for Any {
        fn from(_: Raw) -> Self {
            Any::Raw
        }
    }

    let mut registry: Registry<Any> = Registry::new();
    registry.register::<Rgb>().unwrap();
    registry.register::<Raw>().unwrap();

    let decoded = registry.decode_all("rgb(1; 2; 3); spin()").unwrap();
    assert_eq!(
        decoded,
        vec![Any::Color(Rgb { r: 1, g: 2, b: 3 }), Any::Raw]
    );
}

#[test]
fn test_main_context_type_cannot_register() {
    #[derive(Debug, Default)]
    struct Document;

    impl DataStringEncodable for Document {
        fn schema() -> Schema<Self> {
            Schema::<Self>::main_context()
        }
    }

    #[derive(Debug)]
    struct Any;

    impl From<Document> for Any {
        fn from(_: Document) -> Self {
            Any
        }
    }

    let mut registry: Registry<Any> = Registry::new();
    let result = registry.register::<Document>();
    assert!(matches!(result, Err(Error::InvalidAttributeContext { .. })));
}

#[test]
fn test_nested_codec_round_trip() {
    let stroke = Stroke {
        color: Rgb { r: 1, g: 2, b: 3 },
        width: BigFloat::new(75, -2),
    };
    let text = to_string(&stroke).unwrap();
    assert_eq!(text, "stroke(rgb(1; 2; 3); 0.75)");
    let back: Stroke = from_str(&text).unwrap();
    assert_eq!(back, stroke);
}
