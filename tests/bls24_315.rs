use ecpair::curves::bls24_315::{
    final_exponentiation, miller_loop, pairing, Fq, Fq4, Fq24, Fr, G1Affine, G1Projective, G2Affine,
    G2Prepared, G2Projective, Gt,
};
use ecpair::field::{Field, PrimeField, SqrtField};
use ecpair::pairing::MillerLoopOutput;
use ecpair::{DecodingError, Error};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn random_g2_point(rng: &mut ChaCha20Rng) -> G2Affine {
    let b = G2Affine::curve_params().b;
    loop {
        let x = Fq4::random(rng);
        if let Some(y) = (x.square() * x + b).sqrt() {
            return G2Affine::new(x, y).unwrap();
        }
    }
}

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(315)
}

#[test]
fn test_generators_are_valid() {
    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();
    assert!(g1.is_on_curve());
    assert!(g2.is_on_curve());
    assert!(g1.is_in_correct_subgroup());
    assert!(g2.is_in_correct_subgroup());
}

#[test]
fn test_g1_order_times_cofactor_minus_one() {
    // r * h1 - 1
    let scalar = [
        0x6fe802ffffffffffu64,
        0x421ee5da52bde502,
        0xdec1d01aa27a1ae0,
        0xd3f7498be97c5eaf,
        0x04c23a02b586d650,
    ];
    let g = G1Affine::generator();
    assert_eq!(g.mul_bigint(scalar).into_affine(), -g);
}

#[test]
fn test_g2_order_times_cofactor_minus_one() {
    // r * h2 - 1
    let scalar = [
        0x78e0e3fd00c00000u64,
        0x4d2578c829fb6985,
        0x095e4435b5f55a45,
        0x69d2d13ebd81e3a5,
        0x838f3815c96e20cf,
        0xb13e8108c08999d5,
        0x60b862d0a10e54d3,
        0xd0bbd226df0474ad,
        0xd1976345b35a5fb3,
        0x13753d8e720c1691,
        0xf81cd0a71a90ffdf,
        0xb538d2173ffaaaee,
        0x0bb2e641b8cb74d3,
        0xe43d131f3ff53643,
        0xe24b85240073999a,
        0x5e23d0df63a4e933,
        0x4698e42dd0d4bc9a,
        0x9cf6918ae0b5bdee,
        0x10a268c6c4ebd63a,
        0x00000200ce24637b,
    ];
    let g = G2Affine::generator();
    assert_eq!(g.mul_bigint(scalar).into_affine(), -g);
}

#[test]
fn test_group_law_affine_vs_projective() {
    let mut rng = rng();
    for _ in 0..10 {
        let a = Fr::random(&mut rng);
        let b = Fr::random(&mut rng);
        let p = (G1Affine::generator() * a).into_affine();
        let q = (G1Affine::generator() * b).into_affine();

        let sum = p.into_projective() + q.into_projective();
        assert_eq!(sum.into_affine(), p.add(&q));
        assert_eq!(p.into_projective().add_affine(&q), sum);
        assert_eq!(p.into_projective().double().into_affine(), p.double());
        assert_eq!(G1Affine::generator() * (a + b), sum);
    }

    let g2 = G2Affine::generator();
    let p = (g2 * Fr::from(5u64)).into_affine();
    let q = (g2 * Fr::from(7u64)).into_affine();
    assert_eq!(p.add(&q), (g2 * Fr::from(12u64)).into_affine());
    assert_eq!((p.into_projective() + q.into_projective()), g2 * Fr::from(12u64));
    assert_eq!(p.double(), (g2 * Fr::from(10u64)).into_affine());
}

#[test]
fn test_normalize_batch() {
    let g = G2Projective::generator();
    let points: Vec<G2Projective> = (1..6u64).map(|k| g.mul_bigint([k])).collect();
    let affine = G2Projective::normalize_batch(&points);
    for (p, a) in points.iter().zip(&affine) {
        assert_eq!(p.into_affine(), *a);
    }
}

#[test]
fn test_clear_cofactor_g1() {
    let mut rng = rng();
    let mut found = 0;
    while found < 3 {
        let x = Fq::random(&mut rng);
        let rhs = x.square() * x + Fq::one();
        let Some(y) = rhs.sqrt() else {
            continue;
        };
        let point = G1Affine::new(x, y).unwrap();
        let cleared = point.clear_cofactor();
        assert!(cleared.is_on_curve());
        assert!(cleared.is_in_correct_subgroup());
        found += 1;
    }
}

#[test]
fn test_point_encoding() {
    let mut rng = rng();
    let p = (G1Affine::generator() * Fr::random(&mut rng)).into_affine();
    let q = (G2Affine::generator() * Fr::random(&mut rng)).into_affine();

    assert_eq!(G1Affine::from_bytes(&p.to_bytes()).unwrap(), p);
    assert_eq!(G2Affine::from_bytes(&q.to_bytes()).unwrap(), q);
    assert_eq!(p.to_bytes().len(), 2 * 40);
    assert_eq!(q.to_bytes().len(), 2 * 160);

    let identity = G2Affine::identity().to_bytes();
    assert!(G2Affine::from_bytes(&identity).unwrap().is_identity());

    let json = serde_json::to_string(&q).unwrap();
    let back: G2Affine = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
}

#[test]
fn test_clear_cofactor_g2() {
    let mut rng = rng();
    for _ in 0..2 {
        let point = random_g2_point(&mut rng);
        assert!(point.is_on_curve());
        assert!(!point.is_in_correct_subgroup());

        let cleared = point.clear_cofactor();
        assert!(!cleared.is_identity());
        assert!(cleared.is_in_correct_subgroup());
        assert!(cleared.mul_bigint(Fr::modulus()).is_zero());
    }
}

#[test]
fn test_g2_point_outside_subgroup_is_rejected() {
    let point = random_g2_point(&mut rng());
    assert_eq!(
        G2Affine::from_bytes(&point.to_bytes()),
        Err(DecodingError::NotInSubgroup)
    );

    let cleared = point.clear_cofactor();
    assert_eq!(G2Affine::from_bytes(&cleared.to_bytes()).unwrap(), cleared);
}

#[test]
fn test_point_outside_subgroup_is_rejected() {
    let mut rng = rng();
    loop {
        let x = Fq::random(&mut rng);
        let Some(y) = (x.square() * x + Fq::one()).sqrt() else {
            continue;
        };
        let point = G1Affine::new(x, y).unwrap();
        if point.is_in_correct_subgroup() {
            continue;
        }
        assert_eq!(
            G1Affine::from_bytes(&point.to_bytes()),
            Err(DecodingError::NotInSubgroup)
        );
        break;
    }
}

#[test]
fn test_bilinearity() {
    let mut rng = rng();
    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();
    let base = pairing(&[g1], &[g2]).unwrap();

    for _ in 0..2 {
        let a = Fr::random(&mut rng);
        let b = Fr::random(&mut rng);
        let p = (g1 * a).into_affine();
        let q = (g2 * b).into_affine();

        let ab = pairing(&[p], &[q]).unwrap();
        assert_eq!(ab, base.pow((a * b).into_bigint()));
        assert_eq!(ab, pairing(&[(g1 * (a * b)).into_affine()], &[g2]).unwrap());
        assert_eq!(ab, pairing(&[g1], &[(g2 * (a * b)).into_affine()]).unwrap());
    }
}

#[test]
fn test_non_degeneracy_and_order() {
    let e = pairing(&[G1Affine::generator()], &[G2Affine::generator()]).unwrap();
    assert!(!e.is_one());
    assert!(e.pow(Fr::modulus()).is_one());

    assert_eq!(*e.value(), e.into_inner());
    assert_eq!(e.to_bytes(), e.value().to_bytes());
    assert!(e.value().pow(Fr::modulus()).is_one());
}

#[test]
fn test_negation_gives_inverse() {
    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();
    let e = pairing(&[g1], &[g2]).unwrap();
    let e_neg_p = pairing(&[-g1], &[g2]).unwrap();
    let e_neg_q = pairing(&[g1], &[-g2]).unwrap();

    assert_eq!(e_neg_p, e.inverse());
    assert_eq!(e_neg_q, e.inverse());
    assert!((e * e_neg_p).is_one());
    assert!(pairing(&[g1, -g1], &[g2, g2]).unwrap().is_one());
}

#[test]
fn test_batch_equals_product() {
    let mut rng = rng();
    let ps: Vec<G1Affine> = (0..3)
        .map(|_| (G1Projective::generator() * Fr::random(&mut rng)).into_affine())
        .collect();
    let qs: Vec<G2Affine> = (0..3)
        .map(|_| (G2Projective::generator() * Fr::random(&mut rng)).into_affine())
        .collect();

    let batch = pairing(&ps, &qs).unwrap();
    let product = ps
        .iter()
        .zip(&qs)
        .map(|(p, q)| pairing(&[*p], &[*q]).unwrap())
        .fold(Gt::one(), |acc, e| acc * e);
    assert_eq!(batch, product);
}

#[test]
fn test_length_mismatch() {
    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();
    assert_eq!(
        pairing(&[g1, g1], &[g2]).unwrap_err(),
        Error::LengthMismatch { g1: 2, g2: 1 }
    );
    assert!(matches!(
        miller_loop(&[g1], &[]),
        Err(Error::LengthMismatch { g1: 1, g2: 0 })
    ));
}

#[test]
fn test_empty_input_and_identity_pairs() {
    assert!(pairing(&[], &[]).unwrap().is_one());
    assert_eq!(miller_loop(&[], &[]).unwrap().0, Fq24::one());

    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();
    assert!(pairing(&[G1Affine::identity()], &[g2]).unwrap().is_one());
    assert!(pairing(&[g1], &[G2Affine::identity()]).unwrap().is_one());

    let e = pairing(&[g1], &[g2]).unwrap();
    assert_eq!(pairing(&[g1, G1Affine::identity()], &[g2, g2]).unwrap(), e);
}

#[test]
fn test_prepared_identity_has_no_lines() {
    let prepared = G2Prepared::from(G2Affine::identity());
    assert!(prepared.infinity);
    assert!(prepared.ell_coeffs.is_empty());

    let prepared = G2Prepared::from(G2Affine::generator());
    assert!(!prepared.infinity);
    assert!(!prepared.ell_coeffs.is_empty());
}

#[test]
fn test_final_exponentiation_of_zero() {
    assert_eq!(
        final_exponentiation(MillerLoopOutput(Fq24::zero())).unwrap_err(),
        Error::NonInvertible
    );
}
