// src/models/datas.rs
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data no formato de exibição (dd/mm/aaaa), tal como o utilizador a vê e edita.
/// Pode estar incompleta enquanto o formulário não é validado.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataBr(String);

/// Data no formato do backend (aaaa-mm-dd). Só circula entre a API e os modelos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataIso(String);

impl DataBr {
    /// Cria a partir do texto digitado, aplicando a máscara dd/mm/aaaa.
    pub fn digitada(raw: &str) -> Self {
        DataBr(mascarar_data(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn valida(&self) -> bool {
        data_br_valida(&self.0)
    }

    pub fn para_iso(&self) -> Option<DataIso> {
        para_iso(&self.0)
    }
}

impl fmt::Display for DataBr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl DataIso {
    /// Valor recebido do backend, sem qualquer transformação.
    pub fn do_backend(valor: impl Into<String>) -> Self {
        DataIso(valor.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn para_br(&self) -> DataBr {
        de_iso(&self.0)
    }
}

/// Converte a data opcional do backend para exibição. Ausente vira texto vazio.
pub fn exibir(iso: Option<&DataIso>) -> DataBr {
    iso.map(DataIso::para_br).unwrap_or_default()
}

/// Máscara dd/mm/aaaa aplicada enquanto se digita.
pub fn mascarar_data(raw: &str) -> String {
    let digitos: String = raw.chars().filter(|c| c.is_ascii_digit()).take(8).collect();
    match digitos.len() {
        0..=2 => digitos,
        3..=4 => format!("{}/{}", &digitos[..2], &digitos[2..]),
        _ => format!("{}/{}/{}", &digitos[..2], &digitos[2..4], &digitos[4..]),
    }
}

/// Máscara hh:mm usada nos horários das turmas.
pub fn mascarar_hora(raw: &str) -> String {
    let digitos: String = raw.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
    if digitos.len() >= 3 {
        format!("{}:{}", &digitos[..2], &digitos[2..])
    } else {
        digitos
    }
}

// Separa "dd/mm/aaaa" nas suas partes, exigindo exatamente esse formato.
fn partes_br(br: &str) -> Option<(&str, &str, &str)> {
    let bytes = br.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return None;
    }
    let (dd, mm, aaaa) = (&br[0..2], &br[3..5], &br[6..10]);
    let so_digitos = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if so_digitos(dd) && so_digitos(mm) && so_digitos(aaaa) {
        Some((dd, mm, aaaa))
    } else {
        None
    }
}

/// dd/mm/aaaa -> aaaa-mm-dd. `None` quando o texto não tem o formato exato.
pub fn para_iso(br: &str) -> Option<DataIso> {
    let (dd, mm, aaaa) = partes_br(br)?;
    Some(DataIso(format!("{aaaa}-{mm}-{dd}")))
}

/// aaaa-mm-dd -> dd/mm/aaaa. Texto já em dd/mm/aaaa (ou irreconhecível) passa inalterado.
pub fn de_iso(iso: &str) -> DataBr {
    if iso.is_empty() {
        return DataBr::default();
    }
    if iso.contains('/') {
        return DataBr(iso.to_string());
    }
    let partes: Vec<&str> = iso.split('-').collect();
    match partes.as_slice() {
        [aaaa, mm, dd] => DataBr(format!("{dd}/{mm}/{aaaa}")),
        _ => DataBr(iso.to_string()),
    }
}

fn para_data(br: &str) -> Option<NaiveDate> {
    let (dd, mm, aaaa) = partes_br(br)?;
    let ano: i32 = aaaa.parse().ok()?;
    // Anos abaixo de 100 não são datas de calendário aceites pelo formulário.
    if ano < 100 {
        return None;
    }
    NaiveDate::from_ymd_opt(ano, mm.parse().ok()?, dd.parse().ok()?)
}

/// Validação de calendário (rejeita 31/02, 29/02 fora de ano bissexto, etc.).
pub fn data_br_valida(br: &str) -> bool {
    para_data(br).is_some()
}

/// Idade por extenso ("7 anos e 3 meses") a partir da data de nascimento.
pub fn idade_descrita(nascimento: &DataBr, hoje: NaiveDate) -> String {
    let Some(data) = para_data(nascimento.as_str()) else {
        return "Idade não informada".to_string();
    };
    let mut anos = hoje.year() - data.year();
    let mut meses = hoje.month() as i32 - data.month() as i32;
    if meses < 0 {
        anos -= 1;
        meses += 12;
    }
    format!(
        "{} ano{} e {} {}",
        anos,
        if anos != 1 { "s" } else { "" },
        meses,
        if meses != 1 { "meses" } else { "mês" }
    )
}
