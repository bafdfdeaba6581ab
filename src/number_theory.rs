//! Small number-theory helpers on unsigned integers.

/// Greatest common divisor. `gcd(0, 0) == 0`.
///
///```
/// use copse::number_theory::gcd;
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(0, 5), 5);
///```
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple. Zero if either argument is zero.
///
/// Panics on overflow in debug builds, like any `u64` multiplication.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    // divide first to keep the intermediate small
    a / gcd(a, b) * b
}

/// Computes `base^exp % modulus` by repeated squaring, in `O(log exp)` steps.
///
/// Intermediate products are computed in `u128`, so any `u64` modulus works.
/// Panics if `modulus` is zero.
///
///```
/// use copse::number_theory::pow_mod;
/// assert_eq!(pow_mod(2, 10, 1_000), 24);
/// assert_eq!(pow_mod(3, 0, 7), 1);
/// assert_eq!(pow_mod(5, 3, 1), 0);
///```
pub fn pow_mod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus != 0, "modulus must be positive");
    let m = modulus as u128;
    let mut base = base as u128 % m;
    let mut result = 1 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u64
}

/// Primality test by trial division with divisors of the form `6k ± 1`. `O(√n)`.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i: u64 = 5;
    // `i <= n / i` instead of `i * i <= n`, which could overflow
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// All of the primes `<= n` in increasing order, by the sieve of Eratosthenes.
/// `O(n log log n)` time and `O(n)` memory.
///
///```
/// use copse::number_theory::sieve;
/// assert_eq!(sieve(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
/// assert!(sieve(1).is_empty());
///```
pub fn sieve(n: usize) -> Vec<usize> {
    if n < 2 {
        return vec![];
    }
    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2;
    while i * i <= n {
        if is_prime[i] {
            for multiple in (i * i..=n).step_by(i) {
                is_prime[multiple] = false;
            }
        }
        i += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &prime)| if prime { Some(i) } else { None })
        .collect()
}
