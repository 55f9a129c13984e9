//! Normalizing user input for storage and rendering stored values for display.

use chrono::{DateTime, Utc};

pub fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// `12345678901` becomes `123.456.789-01`. Anything that is not 11 digits is
/// returned as is.
pub fn cpf(cpf: &str) -> String {
    if cpf.len() != 11 || !cpf.is_ascii() {
        return cpf.to_owned();
    }

    format!("{}.{}.{}-{}", &cpf[..3], &cpf[3..6], &cpf[6..9], &cpf[9..])
}

/// Mobile numbers have 11 digits, landlines 10.
pub fn phone(phone: &str) -> String {
    if !phone.is_ascii() {
        return phone.to_owned();
    }

    match phone.len() {
        11 => format!("({}) {}-{}", &phone[..2], &phone[2..7], &phone[7..]),
        10 => format!("({}) {}-{}", &phone[..2], &phone[2..6], &phone[6..]),
        _ => phone.to_owned(),
    }
}

pub fn rg(rg: &str) -> String {
    if rg.len() < 10 || !rg.is_ascii() {
        return rg.to_owned();
    }

    format!("{}-{}", &rg[..10], &rg[10..])
}

pub fn cep(cep: &str) -> String {
    if cep.len() != 8 || !cep.is_ascii() {
        return cep.to_owned();
    }

    format!("{}-{}", &cep[..5], &cep[5..])
}

/// Capitalizes the first letter of every word and lowercases the rest.
pub fn title(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut word_start = true;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            result.push(ch);
            word_start = true;
        }
    }

    result
}

pub fn date(value: &DateTime<Utc>) -> String {
    value.format("%d/%m/%Y").to_string()
}

pub fn date_time(value: &DateTime<Utc>) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}
