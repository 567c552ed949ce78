// src/models/turma.rs
use crate::models::{
    contem,
    datas::{self, DataBr, DataIso},
    texto_ou_nulo, Registro, TextoOuNumero,
};
use serde::{Deserialize, Serialize};

pub const SITUACOES_TURMA: &[&str] = &["Vigente", "Encerrada", "Planejada", "Cancelada"];
pub const TURNOS: &[&str] = &["Matutino", "Vespertino", "Integral"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurmaApi {
    pub id: Option<i64>,
    #[serde(default)]
    pub nome: String,
    pub nome_resumido: Option<String>,
    pub curso: Option<String>,
    pub periodo: Option<String>,
    pub situacao: Option<String>,
    pub turno: Option<String>,
    pub maximo_alunos: Option<i64>,
    pub inicio: Option<DataIso>,
    pub termino: Option<DataIso>,
    pub horario_inicio: Option<String>,
    pub horario_fim: Option<String>,
    pub ano: Option<TextoOuNumero>,
    pub professora: Option<String>,
    pub auxiliar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Turma {
    pub id: Option<i64>,
    pub nome: String,
    pub nome_resumido: String,
    pub curso: String,
    pub periodo: String,
    pub situacao: String,
    pub turno: String,
    pub maximo_alunos: Option<i64>,
    pub inicio: DataBr,
    pub termino: DataBr,
    pub horario_inicio: String,
    pub horario_fim: String,
    pub ano: String,
    pub professora: String,
    pub auxiliar: String,
}

impl From<TurmaApi> for Turma {
    fn from(t: TurmaApi) -> Self {
        Turma {
            id: t.id,
            nome: t.nome,
            nome_resumido: t.nome_resumido.unwrap_or_default(),
            curso: t.curso.unwrap_or_default(),
            periodo: t.periodo.unwrap_or_default(),
            situacao: t.situacao.unwrap_or_default(),
            turno: t.turno.unwrap_or_default(),
            maximo_alunos: t.maximo_alunos,
            inicio: datas::exibir(t.inicio.as_ref()),
            termino: datas::exibir(t.termino.as_ref()),
            horario_inicio: t.horario_inicio.unwrap_or_default(),
            horario_fim: t.horario_fim.unwrap_or_default(),
            ano: t.ano.map(|a| a.to_string()).unwrap_or_default(),
            professora: t.professora.unwrap_or_default(),
            auxiliar: t.auxiliar.unwrap_or_default(),
        }
    }
}

impl Registro for Turma {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Corpo do POST/PUT de turma: textos em branco vão como `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurmaPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub nome_resumido: Option<String>,
    pub curso: Option<String>,
    pub periodo: Option<String>,
    pub situacao: Option<String>,
    pub turno: Option<String>,
    pub maximo_alunos: Option<i64>,
    pub inicio: Option<DataIso>,
    pub termino: Option<DataIso>,
    pub horario_inicio: Option<String>,
    pub horario_fim: Option<String>,
    pub ano: Option<String>,
    pub professora: Option<String>,
    pub auxiliar: Option<String>,
}

impl From<&Turma> for TurmaPayload {
    fn from(t: &Turma) -> Self {
        TurmaPayload {
            id: t.id,
            nome: texto_ou_nulo(&t.nome),
            nome_resumido: texto_ou_nulo(&t.nome_resumido),
            curso: texto_ou_nulo(&t.curso),
            periodo: texto_ou_nulo(&t.periodo),
            situacao: texto_ou_nulo(&t.situacao),
            turno: texto_ou_nulo(&t.turno),
            maximo_alunos: t.maximo_alunos,
            inicio: t.inicio.para_iso(),
            termino: t.termino.para_iso(),
            horario_inicio: texto_ou_nulo(&t.horario_inicio),
            horario_fim: texto_ou_nulo(&t.horario_fim),
            ano: texto_ou_nulo(&t.ano),
            professora: texto_ou_nulo(&t.professora),
            auxiliar: texto_ou_nulo(&t.auxiliar),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TurmaForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub nome_resumido: String,
    #[serde(default)]
    pub curso: String,
    #[serde(default)]
    pub periodo: String,
    #[serde(default)]
    pub situacao: String,
    #[serde(default)]
    pub turno: String,
    #[serde(default)]
    pub maximo_alunos: String,
    #[serde(default)]
    pub inicio: String,
    #[serde(default)]
    pub termino: String,
    #[serde(default)]
    pub horario_inicio: String,
    #[serde(default)]
    pub horario_fim: String,
    #[serde(default)]
    pub ano: String,
    #[serde(default)]
    pub professora: String,
    #[serde(default)]
    pub auxiliar: String,
}

impl TurmaForm {
    pub fn rascunho(&self) -> Turma {
        Turma {
            id: self.id.trim().parse().ok(),
            nome: self.nome.clone(),
            nome_resumido: self.nome_resumido.clone(),
            curso: self.curso.clone(),
            periodo: self.periodo.clone(),
            situacao: self.situacao.clone(),
            turno: self.turno.clone(),
            // Número inválido fica sem limite, como campo vazio.
            maximo_alunos: self.maximo_alunos.trim().parse().ok(),
            inicio: DataBr::digitada(&self.inicio),
            termino: DataBr::digitada(&self.termino),
            horario_inicio: datas::mascarar_hora(&self.horario_inicio),
            horario_fim: datas::mascarar_hora(&self.horario_fim),
            ano: self.ano.clone(),
            professora: self.professora.clone(),
            auxiliar: self.auxiliar.clone(),
        }
    }
}

pub fn validar(t: &Turma) -> Result<(), &'static str> {
    if t.nome.trim().is_empty() {
        return Err("O nome da turma é obrigatório.");
    }
    if !t.inicio.is_empty() && !t.inicio.valida() {
        return Err("Informe uma data de Início válida (dd/mm/aaaa).");
    }
    if !t.termino.is_empty() && !t.termino.valida() {
        return Err("Informe uma data de Término válida (dd/mm/aaaa).");
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FiltroTurmas {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub curso: String,
    #[serde(default)]
    pub turno: String,
    #[serde(default)]
    pub situacao: String,
}

impl FiltroTurmas {
    pub fn aceita(&self, t: &Turma) -> bool {
        contem(&t.nome, &self.nome)
            && contem(&t.curso, &self.curso)
            && (self.turno.is_empty() || t.turno == self.turno)
            && (self.situacao.is_empty() || t.situacao == self.situacao)
    }

    pub fn aplicar<'a>(&self, turmas: &'a [Turma]) -> Vec<&'a Turma> {
        turmas.iter().filter(|t| self.aceita(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turma(nome: &str, curso: &str, turno: &str, situacao: &str) -> Turma {
        Turma {
            id: Some(1),
            nome: nome.into(),
            curso: curso.into(),
            turno: turno.into(),
            situacao: situacao.into(),
            ..Turma::default()
        }
    }

    #[test]
    fn filtros_de_turma() {
        let lista = vec![
            turma("Maternal A", "Educação Infantil", "Matutino", "Vigente"),
            turma("Maternal B", "Educação Infantil", "Vespertino", "Encerrada"),
            turma("Pintura", "Artes", "Matutino", "Vigente"),
        ];
        let por_nome = FiltroTurmas { nome: "maternal".into(), ..Default::default() };
        assert_eq!(por_nome.aplicar(&lista).len(), 2);

        let manha_vigente = FiltroTurmas {
            turno: "Matutino".into(),
            situacao: "Vigente".into(),
            ..Default::default()
        };
        assert_eq!(manha_vigente.aplicar(&lista).len(), 2);

        let por_curso = FiltroTurmas { curso: "artes".into(), ..Default::default() };
        assert_eq!(por_curso.aplicar(&lista)[0].nome, "Pintura");
    }

    #[test]
    fn payload_normaliza_vazios() {
        let t = Turma {
            id: None,
            nome: "Maternal A".into(),
            nome_resumido: "   ".into(),
            maximo_alunos: Some(18),
            inicio: DataBr::digitada("03/02/2025"),
            ..Turma::default()
        };
        let json = serde_json::to_value(TurmaPayload::from(&t)).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["nome"], "Maternal A");
        assert_eq!(json["nomeResumido"], serde_json::Value::Null);
        assert_eq!(json["maximoAlunos"], 18);
        assert_eq!(json["inicio"], "2025-02-03");
        assert_eq!(json["termino"], serde_json::Value::Null);
    }

    #[test]
    fn formulario_com_numero_invalido() {
        let form = TurmaForm {
            nome: "Pintura".into(),
            maximo_alunos: "vinte".into(),
            horario_fim: "1130".into(),
            ..Default::default()
        };
        let t = form.rascunho();
        assert_eq!(t.maximo_alunos, None);
        assert_eq!(t.horario_fim, "11:30");
    }

    #[test]
    fn nome_obrigatorio() {
        assert_eq!(validar(&Turma::default()), Err("O nome da turma é obrigatório."));
        let data_ruim = Turma {
            termino: DataBr::digitada("31/11/2025"),
            ..turma("Pintura", "", "", "")
        };
        assert_eq!(
            validar(&data_ruim),
            Err("Informe uma data de Término válida (dd/mm/aaaa).")
        );
    }

    #[test]
    fn turma_do_backend() {
        let api: TurmaApi = serde_json::from_value(serde_json::json!({
            "id": 2,
            "nome": "Maternal B",
            "situacao": "Vigente",
            "maximoAlunos": 15,
            "inicio": "2025-02-03",
            "termino": null,
            "ano": 2025
        }))
        .unwrap();
        let t = Turma::from(api);
        assert_eq!(t.inicio.as_str(), "03/02/2025");
        assert!(t.termino.is_empty());
        assert_eq!(t.ano, "2025");
        assert_eq!(t.maximo_alunos, Some(15));
    }
}
