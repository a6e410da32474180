/*!
 * MEV Guard Utils
 *
 * Utilitários comuns usados em toda a workspace MEV Guard
 */

use chrono::{TimeZone, Utc};
use rand::Rng;

/// Quantidade de dígitos hexadecimais de um endereço (sem o prefixo `0x`)
pub const ADDRESS_HEX_LEN: usize = 40;

/// Sufixo que identifica um nome ENS
pub const ENS_SUFFIX: &str = ".eth";

/// Milissegundos em um dia
pub const DAY_MILLIS: i64 = 86_400_000;

/// Apara a consulta e descarta entradas vazias
pub fn normalize_query(query: &str) -> Option<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Verifica se a consulta tem formato de nome ENS
pub fn is_ens_name(query: &str) -> bool {
    query.ends_with(ENS_SUFFIX)
}

/// Abrevia um endereço ou hash para exibição: `0x12345678...9abcdef0`
pub fn format_address(addr: &str) -> String {
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() <= 18 {
        return addr.to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Formata um timestamp em milissegundos como data UTC (`AAAA-MM-DD`)
pub fn format_date(timestamp_ms: i64) -> String {
    match Utc.timestamp_millis_opt(timestamp_ms).single() {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}

/// Timestamp de `days` dias antes de `now_ms`
pub fn days_ago(now_ms: i64, days: i64) -> i64 {
    now_ms - DAY_MILLIS * days
}

/// Ajusta uma sequência de dígitos hexadecimais para `len` caracteres,
/// truncando o excesso e completando à direita com `0`
pub fn pad_hex_digits(digits: &str, len: usize) -> String {
    let mut out: String = digits.chars().take(len).collect();
    while out.len() < len {
        out.push('0');
    }
    out
}

/// Gera um endereço pseudoaleatório `0x` + 40 dígitos hexadecimais.
///
/// Apenas os primeiros 16 dígitos são aleatórios; o restante é preenchido
/// com zeros.
pub fn random_wallet_address<R: Rng>(rng: &mut R) -> String {
    let bytes: [u8; 8] = rng.gen();
    let digits = hex::encode(bytes);
    format!("0x{}", pad_hex_digits(&digits, ADDRESS_HEX_LEN))
}
