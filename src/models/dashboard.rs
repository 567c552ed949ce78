// src/models/dashboard.rs
use serde::Deserialize;

/// Contadores agregados devolvidos por `GET /api/dashboard`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub turmas_vigentes: i64,
    pub alunos_ativos: i64,
    pub alunos_matriculados: i64,
    pub media_alunos_por_turma: f64,
    pub novos_alunos_ultimo_ano: i64,
}

impl Dashboard {
    pub fn ativos_nao_matriculados(&self) -> i64 {
        (self.alunos_ativos - self.alunos_matriculados).max(0)
    }

    /// Média com uma casa decimal.
    pub fn media_formatada(&self) -> String {
        format!("{:.1}", self.media_alunos_por_turma)
    }

    /// Percentagem (0..=100) dos ativos que estão matriculados.
    pub fn percentual_matriculados(&self) -> u32 {
        let total = self.alunos_matriculados.max(0) + self.ativos_nao_matriculados();
        if total == 0 {
            return 0;
        }
        ((self.alunos_matriculados.max(0) as f64 / total as f64) * 100.0).round() as u32
    }

    pub fn percentual_nao_matriculados(&self) -> u32 {
        if self.alunos_matriculados.max(0) + self.ativos_nao_matriculados() == 0 {
            return 0;
        }
        100 - self.percentual_matriculados()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribuicao_dos_ativos() {
        let d: Dashboard = serde_json::from_value(serde_json::json!({
            "turmasVigentes": 4,
            "alunosAtivos": 40,
            "alunosMatriculados": 30,
            "mediaAlunosPorTurma": 7.5,
            "novosAlunosUltimoAno": 12
        }))
        .unwrap();
        assert_eq!(d.ativos_nao_matriculados(), 10);
        assert_eq!(d.percentual_matriculados(), 75);
        assert_eq!(d.percentual_nao_matriculados(), 25);
        assert_eq!(d.media_formatada(), "7.5");
    }

    #[test]
    fn sem_alunos_nao_divide_por_zero() {
        let d = Dashboard::default();
        assert_eq!(d.percentual_matriculados(), 0);
        assert_eq!(d.percentual_nao_matriculados(), 0);
        assert_eq!(d.media_formatada(), "0.0");
    }

    #[test]
    fn matriculados_acima_dos_ativos_nao_fica_negativo() {
        let d = Dashboard { alunos_ativos: 3, alunos_matriculados: 5, ..Dashboard::default() };
        assert_eq!(d.ativos_nao_matriculados(), 0);
        assert_eq!(d.percentual_matriculados(), 100);
    }
}
