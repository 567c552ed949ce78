// src/models/aluno.rs
use crate::models::{
    contem,
    datas::{self, DataBr, DataIso},
    igual_ou_vazio,
    situacao::{self, Situacao},
    texto_ou_nulo, Registro, TextoOuNumero,
};
use serde::{Deserialize, Serialize};

/// Aluno como o backend o entrega. Os campos de turma/matrícula são
/// acrescentados pelo backend apenas para exibição.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlunoApi {
    pub id: Option<i64>,
    #[serde(default)]
    pub nome: String,
    pub data_nascimento: Option<DataIso>,
    pub responsavel_pedagogico: Option<String>,
    pub parentesco: Option<String>,
    pub email_responsavel: Option<String>,
    pub telefone1: Option<String>,
    pub telefone2: Option<String>,
    pub status: Option<Situacao>,
    pub data_criacao: Option<String>,
    pub turma: Option<String>,
    pub matricula: Option<TextoOuNumero>,
    pub professora: Option<String>,
    pub auxiliar: Option<String>,
    pub horario_inicio: Option<String>,
    pub horario_fim: Option<String>,
    pub periodo: Option<String>,
    pub ano: Option<TextoOuNumero>,
}

/// Aluno no ecrã: textos sempre presentes (vazio = não informado), data em dd/mm/aaaa.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aluno {
    pub id: Option<i64>,
    pub nome: String,
    pub data_nascimento: DataBr,
    pub responsavel_pedagogico: String,
    pub parentesco: String,
    pub email_responsavel: String,
    pub telefone1: String,
    pub telefone2: String,
    pub status: Option<Situacao>,
    pub data_criacao: Option<String>,
    // Só exibição
    pub turma: String,
    pub matricula: String,
    // Acadêmico
    pub professora: String,
    pub auxiliar: String,
    pub horario_inicio: String,
    pub horario_fim: String,
    pub periodo: String,
    pub ano: String,
}

impl From<AlunoApi> for Aluno {
    fn from(a: AlunoApi) -> Self {
        Aluno {
            id: a.id,
            nome: a.nome,
            data_nascimento: datas::exibir(a.data_nascimento.as_ref()),
            responsavel_pedagogico: a.responsavel_pedagogico.unwrap_or_default(),
            parentesco: a.parentesco.unwrap_or_default(),
            email_responsavel: a.email_responsavel.unwrap_or_default(),
            telefone1: a.telefone1.unwrap_or_default(),
            telefone2: a.telefone2.unwrap_or_default(),
            status: a.status,
            data_criacao: a.data_criacao,
            turma: a.turma.unwrap_or_default(),
            matricula: a.matricula.map(|m| m.to_string()).unwrap_or_default(),
            professora: a.professora.unwrap_or_default(),
            auxiliar: a.auxiliar.unwrap_or_default(),
            horario_inicio: a.horario_inicio.unwrap_or_default(),
            horario_fim: a.horario_fim.unwrap_or_default(),
            periodo: a.periodo.unwrap_or_default(),
            ano: a.ano.map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

impl Registro for Aluno {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Aluno {
    pub fn descricao_status(&self) -> &str {
        self.status.as_ref().map(|s| s.descricao.as_str()).unwrap_or("")
    }
}

/// Corpo do POST/PUT de aluno. `turma` e `matricula` não são enviados:
/// pertencem à matrícula, não ao aluno.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlunoPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nome: String,
    pub data_nascimento: Option<DataIso>,
    pub responsavel_pedagogico: Option<String>,
    pub parentesco: Option<String>,
    pub email_responsavel: Option<String>,
    pub telefone1: Option<String>,
    pub telefone2: Option<String>,
    pub status: Option<Situacao>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_criacao: Option<String>,
    pub professora: Option<String>,
    pub auxiliar: Option<String>,
    pub horario_inicio: Option<String>,
    pub horario_fim: Option<String>,
    pub periodo: Option<String>,
    pub ano: Option<String>,
}

impl From<&Aluno> for AlunoPayload {
    fn from(a: &Aluno) -> Self {
        AlunoPayload {
            id: a.id,
            nome: a.nome.trim().to_string(),
            data_nascimento: a.data_nascimento.para_iso(),
            responsavel_pedagogico: texto_ou_nulo(&a.responsavel_pedagogico),
            parentesco: texto_ou_nulo(&a.parentesco),
            email_responsavel: texto_ou_nulo(&a.email_responsavel),
            telefone1: texto_ou_nulo(&a.telefone1),
            telefone2: texto_ou_nulo(&a.telefone2),
            status: a.status.clone(),
            data_criacao: a.data_criacao.clone(),
            professora: texto_ou_nulo(&a.professora),
            auxiliar: texto_ou_nulo(&a.auxiliar),
            horario_inicio: texto_ou_nulo(&a.horario_inicio),
            horario_fim: texto_ou_nulo(&a.horario_fim),
            periodo: texto_ou_nulo(&a.periodo),
            ano: texto_ou_nulo(&a.ano),
        }
    }
}

/// Formulário do modal de aluno.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlunoForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub data_nascimento: String,
    #[serde(default)]
    pub responsavel_pedagogico: String,
    #[serde(default)]
    pub parentesco: String,
    #[serde(default)]
    pub email_responsavel: String,
    #[serde(default)]
    pub telefone1: String,
    #[serde(default)]
    pub telefone2: String,
    #[serde(default)]
    pub status_id: String,
    #[serde(default)]
    pub data_criacao: String,
    #[serde(default)]
    pub turma: String,
    #[serde(default)]
    pub matricula: String,
    #[serde(default)]
    pub professora: String,
    #[serde(default)]
    pub auxiliar: String,
    #[serde(default)]
    pub horario_inicio: String,
    #[serde(default)]
    pub horario_fim: String,
    #[serde(default)]
    pub periodo: String,
    #[serde(default)]
    pub ano: String,
}

impl AlunoForm {
    pub fn rascunho(&self, status: &[Situacao]) -> Aluno {
        Aluno {
            id: self.id.trim().parse().ok(),
            nome: self.nome.clone(),
            data_nascimento: DataBr::digitada(&self.data_nascimento),
            responsavel_pedagogico: self.responsavel_pedagogico.clone(),
            parentesco: self.parentesco.clone(),
            email_responsavel: self.email_responsavel.clone(),
            telefone1: self.telefone1.clone(),
            telefone2: self.telefone2.clone(),
            status: situacao::por_id(status, self.status_id.trim().parse().ok()),
            data_criacao: texto_ou_nulo(&self.data_criacao),
            turma: self.turma.clone(),
            matricula: self.matricula.clone(),
            professora: self.professora.clone(),
            auxiliar: self.auxiliar.clone(),
            horario_inicio: datas::mascarar_hora(&self.horario_inicio),
            horario_fim: datas::mascarar_hora(&self.horario_fim),
            periodo: self.periodo.clone(),
            ano: self.ano.clone(),
        }
    }
}

pub fn validar(a: &Aluno) -> Result<(), &'static str> {
    if a.nome.trim().is_empty() {
        return Err("O nome do aluno é obrigatório.");
    }
    if !a.data_nascimento.is_empty() && !a.data_nascimento.valida() {
        return Err("Informe uma data de nascimento válida (dd/mm/aaaa).");
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FiltroAlunos {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub turma: String,
    #[serde(default)]
    pub matricula: String,
    #[serde(default)]
    pub status: String,
}

impl FiltroAlunos {
    pub fn aceita(&self, a: &Aluno) -> bool {
        contem(&a.nome, &self.nome)
            && contem(&a.turma, &self.turma)
            && contem(&a.matricula, &self.matricula)
            && igual_ou_vazio(a.descricao_status(), &self.status)
    }

    pub fn aplicar<'a>(&self, alunos: &'a [Aluno]) -> Vec<&'a Aluno> {
        alunos.iter().filter(|a| self.aceita(a)).collect()
    }
}
