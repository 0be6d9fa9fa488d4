use ecpair::curves::bls24_315::twisted_edwards::{curve_params, EdwardsAffine, EdwardsProjective};
use ecpair::curves::bls24_315::Fr;
use ecpair::field::Field;
use ecpair::DecodingError;

fn fr(s: &str) -> Fr {
    s.parse().unwrap()
}

fn point(x: &str, y: &str) -> EdwardsAffine {
    EdwardsAffine::new(fr(x), fr(y)).unwrap()
}

fn p1() -> EdwardsAffine {
    point(
        "606504702213383506549967602976986366481287558001216693316618222045568485627",
        "127651159908496619690870959004301413053185147667621912551672989511587272066",
    )
}

fn p2() -> EdwardsAffine {
    point(
        "7662037931514052354271565197730264559843515866448459536468212544166952037402",
        "5374285597877801050393191367017366954304415358605622399798479904245876287656",
    )
}

fn sum_p1_p2() -> EdwardsAffine {
    point(
        "4909234445028952914550300988482203785951133624557087480905450649944663760912",
        "611136336403416894346286896787687479722638935668225997874514807048441098127",
    )
}

fn to_double() -> EdwardsAffine {
    point(
        "7549511283461560995748751740971458842863896160950410295399102497784871995152",
        "8431724913862871887763243257724106664766884684772085757470778116377697070220",
    )
}

fn doubled() -> EdwardsAffine {
    point(
        "7315562943575520667466083922507663735652170740276006185986921942734506037136",
        "1549739767261155844537395769333564653013978414582915869918154407683216747833",
    )
}

#[test]
fn test_add() {
    assert_eq!(p1().add(&p2()), sum_p1_p2());
    assert_eq!(p1() + p2(), sum_p1_p2());
}

#[test]
fn test_add_projective() {
    let sum = p1().into_projective() + p2().into_projective();
    assert_eq!(sum.into_affine(), sum_p1_p2());
}

#[test]
fn test_double() {
    assert_eq!(to_double().double(), doubled());
    assert_eq!(to_double().add(&to_double()), doubled());
}

#[test]
fn test_double_projective() {
    let p = to_double().into_projective().double();
    assert_eq!(p.into_affine(), doubled());
}

#[test]
fn test_scalar_mul() {
    let base = EdwardsAffine::generator();
    let expected = point(
        "4154591871721798907960491452113634764565764905318523916560046077883612108719",
        "5027805281744385394708323878140623534818171762863978182421480579085966004942",
    );
    assert_eq!(base.mul_bigint([23902374u64]).into_affine(), expected);
}

#[test]
fn test_scalar_mul_by_group_order_minus_one() {
    // 8 * order - 1
    let scalar = [
        0xaac55f4b2dc79407u64,
        0x9c79c4fb3df6d3f2,
        0x25fc7ec9cf927a98,
        0x196deac24a9da12b,
    ];
    let base = EdwardsAffine::generator();
    assert_eq!(base.mul_bigint(scalar).into_affine(), -base);
}

#[test]
fn test_base_plus_base() {
    let base = EdwardsAffine::generator();
    let twice = base.add(&base);
    assert_eq!(twice, base.double());
    assert_eq!(twice, (base.into_projective() + base.into_projective()).into_affine());
    assert_eq!(twice, base.mul_bigint([2u64]).into_affine());
}

#[test]
fn test_identity_and_negation() {
    let base = EdwardsAffine::generator();
    let identity = EdwardsAffine::identity();
    assert!(identity.is_on_curve());
    assert_eq!(base.add(&identity), base);
    assert!(base.add(&-base).is_identity());
    assert!((base.into_projective() - base.into_projective()).is_zero());
    assert!(EdwardsProjective::zero().into_affine().is_identity());
}

#[test]
fn test_curve_params() {
    let params = curve_params();
    assert_eq!(params.a, Fr::from(257732u64));
    assert_eq!(params.d, Fr::from(257728u64));
    assert_eq!(params.cofactor, vec![8]);
    assert_eq!(params.base, EdwardsAffine::generator());
    assert!(params.base.is_on_curve());
    assert!(params.base.is_in_correct_subgroup());

    // params are a copy
    let mut copy = curve_params();
    copy.a = Fr::one();
    assert_eq!(copy.a, Fr::one());
    assert_eq!(curve_params().a, Fr::from(257732u64));
}

#[test]
fn test_bytes_roundtrip() {
    let base = EdwardsAffine::generator();
    let mut point = base;
    for _ in 0..20 {
        let bytes = point.to_bytes();
        assert_eq!(bytes.len(), EdwardsAffine::ENCODED_LEN);
        assert_eq!(EdwardsAffine::from_bytes(&bytes).unwrap(), point);

        let compressed = point.to_compressed();
        assert_eq!(compressed.len(), EdwardsAffine::COMPRESSED_LEN);
        assert_eq!(EdwardsAffine::from_compressed(&compressed).unwrap(), point);

        point = point.add(&base);
    }
}

#[test]
fn test_new_checks_curve_equation() {
    let g = EdwardsAffine::generator();
    assert_eq!(
        EdwardsAffine::new(g.x, g.y + Fr::one()),
        Err(DecodingError::NotOnCurve)
    );
    assert_eq!(EdwardsAffine::new(g.x, g.y).unwrap(), g);
    assert!(EdwardsAffine::new(Fr::zero(), Fr::one()).unwrap().is_identity());
}

#[test]
fn test_decoding_errors() {
    let mut bytes = EdwardsAffine::generator().to_bytes();
    let last = bytes.len() - 1;
    bytes[last] ^= 1;
    assert_eq!(
        EdwardsAffine::from_bytes(&bytes),
        Err(DecodingError::NotOnCurve)
    );
    assert!(matches!(
        EdwardsAffine::from_compressed(&bytes),
        Err(DecodingError::InvalidLength { .. })
    ));
}

#[test]
fn test_serde_roundtrip() {
    let base = EdwardsAffine::generator().double();
    let json = serde_json::to_string(&base).unwrap();
    let back: EdwardsAffine = serde_json::from_str(&json).unwrap();
    assert_eq!(back, base);
}
