use trivit::{
    Answer, EditorError, JsonFileStore, Question, QuestionEditor, QuestionStore, QuestionType,
    TypeChange, type_of_display,
};

#[test]
fn author_rewrites_question_and_saves_it() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("questions.json"));

    let question = Question::new("alice", "Which of these are primary colours?", QuestionType::McMultiple);
    let id = question.id;
    let mut editor = QuestionEditor::new(question);

    let red = editor.add_choice().unwrap();
    editor.set_choice_text(&red, "Red").unwrap();
    editor.toggle_choice(&red).unwrap();
    let green = editor.add_choice().unwrap();
    editor.set_choice_text(&green, "Green").unwrap();
    let blue = editor.add_choice().unwrap();
    editor.set_choice_text(&blue, "Blue").unwrap();
    editor.toggle_choice(&blue).unwrap();
    store.save_question(editor.question()).unwrap();

    // Picking the label from a dropdown.
    let to = type_of_display("Multiple Choice -- Single Answer").unwrap();
    assert_eq!(editor.change_type(to).unwrap(), TypeChange::Applied);
    let flags: Vec<bool> = editor
        .question()
        .answer
        .as_choices()
        .unwrap()
        .iter()
        .map(|c| c.is_truthy())
        .collect();
    assert_eq!(flags, vec![true, false, false]);

    match editor.change_type(QuestionType::FreeForm).unwrap() {
        TypeChange::NeedsConfirmation { proposed } => {
            assert_eq!(proposed, Answer::FreeForm("Red".to_string()));
        }
        TypeChange::Applied => panic!("dropping choices must ask first"),
    }
    editor.confirm().unwrap();
    store.save_question(editor.question()).unwrap();

    let stored = store.load_question("alice", id).unwrap().unwrap();
    assert_eq!(stored.question_type, QuestionType::FreeForm);
    assert_eq!(stored.answer, Answer::FreeForm("Red".to_string()));
}

#[test]
fn declined_change_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("questions.json"));

    let mut question = Question::new("bob", "Is water wet?", QuestionType::FreeForm);
    question.answer = Answer::FreeForm("Arguably".to_string());
    store.save_question(&question).unwrap();

    let mut editor = QuestionEditor::new(store.load_question("bob", question.id).unwrap().unwrap());
    assert!(matches!(
        editor.change_type(QuestionType::TrueFalse).unwrap(),
        TypeChange::NeedsConfirmation { .. }
    ));
    assert!(editor.cancel().is_some());
    assert_eq!(editor.confirm(), Err(EditorError::NothingPending));
    store.save_question(editor.question()).unwrap();

    assert_eq!(store.load_questions("bob").unwrap(), vec![question]);
}
