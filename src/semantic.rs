// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Semantic query expansion.
//!
//! People search for what they want to do ("monitoring", "gitops"), not for
//! what the exam is called ("PCA", "CGOA"). A fixed table bridges the two:
//! each trigger maps to terms that should also be tried against records.
//!
//! Containment is checked both ways, on plain substrings:
//!
//! ```text
//! query "k8s cluster"  contains trigger "k8s"          → kubernetes, cka, ckad, cks, kcna
//! query "ckad"         contains related term "cka"     → every entry listing "cka"
//! ```
//!
//! The table is compiled in and never changes at runtime. Expansion runs once
//! per query; expanded terms are never expanded again, so the output is
//! bounded by the table size.

use std::collections::BTreeSet;

/// Trigger → related terms. All lowercase.
pub static SEMANTIC_MAP: &[(&str, &[&str])] = &[
    ("k8s", &["kubernetes", "cka", "ckad", "cks", "kcna"]),
    ("kubernetes", &["k8s", "cka", "ckad", "cks", "kcna", "kcsa"]),
    ("cloud native", &["kcna", "cka", "ckad", "cks"]),
    ("cncf", &["kcna", "cka", "ckad", "cks"]),
    ("security", &["cks", "kcsa", "falco", "policy"]),
    ("admin", &["cka", "administrator", "cluster"]),
    ("developer", &["ckad", "application", "deploy"]),
    ("monitoring", &["prometheus", "pca", "observability", "alerting"]),
    ("metrics", &["prometheus", "pca", "promql"]),
    ("observability", &["prometheus", "opentelemetry", "pca", "otca"]),
    ("tracing", &["opentelemetry", "otca", "jaeger"]),
    ("service mesh", &["istio", "ica", "envoy"]),
    ("mesh", &["istio", "ica", "sidecar"]),
    ("network", &["cilium", "cca", "cni"]),
    ("ebpf", &["cilium", "cca"]),
    ("gitops", &["argo", "argocd", "flux", "cgoa"]),
    ("portal", &["backstage", "cba"]),
    ("platform", &["backstage", "cba", "developer portal"]),
    ("policy", &["kyverno", "kca", "opa"]),
    ("beginner", &["kcna", "kcsa", "associate"]),
    ("entry", &["kcna", "kcsa", "associate"]),
    ("expert", &["cks", "advanced"]),
];

/// Expand a query into itself plus every related term it triggers.
///
/// An entry fires when the query contains its trigger, or contains any of its
/// related terms. Only the related terms are added, not the trigger.
pub fn expand(query: &str) -> BTreeSet<String> {
    let query = query.to_lowercase();
    let mut terms = BTreeSet::new();

    for (trigger, related) in SEMANTIC_MAP {
        let fires = query.contains(trigger) || related.iter().any(|term| query.contains(term));
        if fires {
            terms.extend(related.iter().map(|term| term.to_string()));
        }
    }

    terms.insert(query);
    terms
}

/// Related terms for an exact trigger, if the table has one.
pub fn related_terms(trigger: &str) -> Option<&'static [&'static str]> {
    SEMANTIC_MAP
        .iter()
        .find(|(t, _)| t.eq_ignore_ascii_case(trigger))
        .map(|(_, related)| *related)
}
