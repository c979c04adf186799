use recast_compose::{compose, Composer};
use recast_markup::{parse_str, ViewKind};
use rstest::rstest;

fn out(src: &str) -> String {
    compose(&parse_str(src).unwrap()).unwrap()
}

fn out_at(src: &str, depth: usize) -> String {
    Composer::with_start_indentation(depth).compose(&parse_str(src).unwrap()).unwrap()
}

const SCREEN: &str = r#"
<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android"
    xmlns:app="http://schemas.android.com/apk/res-auto"
    android:layout_width="match_parent"
    android:layout_height="match_parent"
    android:orientation="vertical"
    android:gravity="center_horizontal"
    android:padding="16dp">

    <TextView
        android:text="@string/title"
        android:textSize="24sp"
        android:textStyle="bold" />

    <EditText
        android:hint="Password"
        android:inputType="textPassword"
        android:layout_width="match_parent" />

    <FrameLayout android:layout_width="match_parent" android:layout_height="120dp">
        <ImageView android:src="@drawable/banner" android:scaleType="centerCrop"
            android:layout_width="match_parent" android:layout_height="match_parent" />
        <Button android:text="Go" android:layout_gravity="bottom|end" />
    </FrameLayout>

    <CheckBox android:text="Remember me" android:checked="true" />
</LinearLayout>
"#;

#[test]
fn realistic_screen() {
    let expected = "\
Column(modifier = Modifier.fillMaxSize().padding(16.dp), horizontalAlignment = Alignment.CenterHorizontally) {
    Text(text = stringResource(id = R.string.title), fontSize = 24.sp, fontWeight = FontWeight.Bold)
    TextField(value = \"\", onValueChange = {}, modifier = Modifier.fillMaxWidth(), placeholder = { Text(text = \"Password\") }, visualTransformation = PasswordVisualTransformation(), keyboardOptions = KeyboardOptions(keyboardType = KeyboardType.Password))
    Box(modifier = Modifier.fillMaxWidth().height(120.dp)) {
        Image(painter = painterResource(id = R.drawable.banner), contentDescription = null, modifier = Modifier.fillMaxSize(), contentScale = ContentScale.Crop)
        Button(onClick = {}, modifier = Modifier.align(Alignment.BottomEnd)) { Text(text = \"Go\") }
    }
    Row(verticalAlignment = Alignment.CenterVertically) { Checkbox(checked = true, onCheckedChange = {}); Text(text = \"Remember me\") }
}
";
    assert_eq!(out(SCREEN), expected);
}

// ── Example scenarios ─────────────────────────────────────────────────────

#[test]
fn range_slider_bounds() {
    assert_eq!(
        out(r#"<RangeSlider min="0" max="100" />"#),
        "RangeSlider(value = 0f..100f, onValueChange = {}, valueRange = 0f..100f)\n"
    );
}

#[test]
fn inverted_range_is_a_compose_error() {
    let layout = parse_str(r#"<RangeSlider min="50" max="10" />"#).unwrap();
    let e = compose(&layout).unwrap_err();
    assert_eq!(e.kind, ViewKind::RangeSlider);
    assert_eq!(e.attribute, "min");
    assert_eq!(e.to_string(), "cannot compose RangeSlider: `min` is greater than `max` (50 > 10)");
}

#[test]
fn container_with_three_leaves() {
    let src = r#"<Column><TextView android:text="a" /><TextView android:text="b" /><TextView android:text="c" /></Column>"#;
    assert_eq!(
        out(src),
        "Column {\n    Text(text = \"a\")\n    Text(text = \"b\")\n    Text(text = \"c\")\n}\n"
    );
}

#[test]
fn empty_container() {
    assert_eq!(out("<Row></Row>"), "Row {\n}\n");
    assert_eq!(out("<Column><Row /><View /></Column>"), "Column {\n    Row {\n    }\n    Spacer(modifier = Modifier)\n}\n");
}

#[test]
fn compose_node_emits_a_subtree() {
    let layout = parse_str(SCREEN).unwrap();
    let frame = &layout.root().unwrap().children()[2];
    let code = Composer::with_start_indentation(2).compose_node(frame).unwrap();
    assert!(code.starts_with("        Box(modifier = Modifier.fillMaxWidth().height(120.dp)) {\n"));
    assert!(code.ends_with("        }\n"));
}

// ── Properties ────────────────────────────────────────────────────────────

#[rstest]
#[case(1)]
#[case(3)]
fn start_indentation_shifts_every_line(#[case] depth: usize) {
    let base = out(SCREEN);
    let shifted = out_at(SCREEN, depth);
    let prefix = "    ".repeat(depth);
    let expected: String = base.lines().map(|l| format!("{prefix}{l}\n")).collect();
    assert_eq!(shifted, expected);
}

#[test]
fn deterministic() {
    let layout = parse_str(SCREEN).unwrap();
    assert_eq!(compose(&layout).unwrap(), compose(&layout).unwrap());
}

#[test]
fn blocks_balance() {
    let code = out(SCREEN);
    let opens = code.lines().filter(|l| l.ends_with(" {")).count();
    let closes = code.lines().filter(|l| l.trim() == "}").count();
    assert_eq!(opens, closes);
}

#[rstest]
#[case("<TextView />", r#"<TextView android:text="" android:visibility="visible" android:textStyle="normal" />"#)]
#[case("<View />", r#"<View android:alpha="1" android:enabled="true" android:layout_width="wrap_content" />"#)]
#[case("<CheckBox />", r#"<CheckBox android:checked="false" />"#)]
#[case("<Slider />", r#"<Slider android:valueFrom="0" android:valueTo="1" android:stepSize="0" />"#)]
#[case("<ImageView android:src=\"@drawable/a\" />", r#"<ImageView android:src="@drawable/a" android:scaleType="fitCenter" />"#)]
#[case("<LinearLayout />", r#"<LinearLayout android:orientation="horizontal" android:gravity="top|start" />"#)]
fn explicit_defaults_compose_like_absent(#[case] bare: &str, #[case] explicit: &str) {
    assert_eq!(out(bare), out(explicit));
}

// ── Containers ────────────────────────────────────────────────────────────

#[test]
fn radio_group_is_selectable() {
    let src = r#"<RadioGroup><RadioButton android:text="A" android:checked="true" /><RadioButton /></RadioGroup>"#;
    assert_eq!(
        out(src),
        "Column(modifier = Modifier.selectableGroup()) {\n    \
         Row(verticalAlignment = Alignment.CenterVertically) { RadioButton(selected = true, onClick = {}); Text(text = \"A\") }\n    \
         RadioButton(selected = false, onClick = {})\n}\n"
    );
}

#[test]
fn scroll_views() {
    assert_eq!(
        out("<ScrollView><LinearLayout android:orientation=\"vertical\" /></ScrollView>"),
        "Column(modifier = Modifier.verticalScroll(rememberScrollState())) {\n    Column {\n    }\n}\n"
    );
    assert!(out("<HorizontalScrollView><Row /></HorizontalScrollView>").starts_with("Row(modifier = Modifier.horizontalScroll("));

    let e = compose(&parse_str("<ScrollView><View /><View /></ScrollView>").unwrap()).unwrap_err();
    assert_eq!((e.kind, e.attribute.as_str()), (ViewKind::ScrollView, "children"));
}

#[test]
fn card() {
    let src = r##"<androidx.cardview.widget.CardView app:cardCornerRadius="8dp" app:cardBackgroundColor="#FFFFFF" app:cardElevation="2dp"><TextView android:text="x" /></androidx.cardview.widget.CardView>"##;
    assert_eq!(
        out(src),
        "Card(shape = RoundedCornerShape(8.dp), backgroundColor = Color.White, elevation = 2.dp) {\n    Text(text = \"x\")\n}\n"
    );
}

#[test]
fn weighted_children() {
    let src = r#"<LinearLayout android:orientation="vertical">
        <View android:layout_height="0dp" android:layout_weight="2" android:layout_width="match_parent" />
    </LinearLayout>"#;
    assert_eq!(out(src), "Column {\n    Spacer(modifier = Modifier.weight(2f).fillMaxWidth())\n}\n");
}

#[test]
fn include_calls_composable() {
    assert_eq!(out(r#"<Column><include layout="@layout/toolbar_main" /></Column>"#), "Column {\n    ToolbarMain()\n}\n");
}

// ── ConstraintLayout ──────────────────────────────────────────────────────

#[test]
fn constraint_layout_refs_and_links() {
    let src = r#"<ConstraintLayout android:layout_width="match_parent" android:layout_height="match_parent">
        <TextView android:id="@+id/title" android:text="Hi"
            app:layout_constraintTop_toTopOf="parent"
            app:layout_constraintStart_toStartOf="parent" />
        <Button android:id="@+id/ok_button" android:text="OK" android:layout_width="0dp"
            app:layout_constraintTop_toBottomOf="@id/title"
            app:layout_constraintStart_toStartOf="parent"
            app:layout_constraintEnd_toEndOf="parent" />
        <View />
    </ConstraintLayout>"#;
    let expected = "\
ConstraintLayout(modifier = Modifier.fillMaxSize()) {
    val title = createRef()
    val okButton = createRef()
    Text(text = \"Hi\", modifier = Modifier.constrainAs(title) { top.linkTo(parent.top); start.linkTo(parent.start) })
    Button(onClick = {}, modifier = Modifier.constrainAs(okButton) { top.linkTo(title.bottom); start.linkTo(parent.start); end.linkTo(parent.end); width = Dimension.fillToConstraints }) { Text(text = \"OK\") }
    Spacer(modifier = Modifier)
}
";
    assert_eq!(out(src), expected);
}

#[test]
fn generated_refs_skip_names_taken_by_ids() {
    let src = r#"<ConstraintLayout>
        <View android:id="@+id/ref0" />
        <View app:layout_constraintTop_toBottomOf="@id/ref0" />
    </ConstraintLayout>"#;
    let expected = "\
ConstraintLayout {
    val ref0 = createRef()
    val ref1 = createRef()
    Spacer(modifier = Modifier.constrainAs(ref0) {})
    Spacer(modifier = Modifier.constrainAs(ref1) { top.linkTo(ref0.bottom) })
}
";
    assert_eq!(out(src), expected);
}

#[test]
fn id_without_kotlin_spelling_gets_generated_ref() {
    let src = r#"<ConstraintLayout>
        <View android:id="@+id/_" app:layout_constraintTop_toTopOf="parent" />
        <View app:layout_constraintTop_toBottomOf="@id/_" />
    </ConstraintLayout>"#;
    let expected = "\
ConstraintLayout {
    val ref0 = createRef()
    val ref1 = createRef()
    Spacer(modifier = Modifier.constrainAs(ref0) { top.linkTo(parent.top) })
    Spacer(modifier = Modifier.constrainAs(ref1) { top.linkTo(ref0.bottom) })
}
";
    assert_eq!(out(src), expected);
}

#[rstest]
#[case::same_camel_case(r#"<ConstraintLayout><View android:id="@+id/ok_button" /><View android:id="@+id/okButton" /></ConstraintLayout>"#, "id")]
#[case::unknown_sibling(r#"<ConstraintLayout><View app:layout_constraintTop_toBottomOf="@id/nope" /></ConstraintLayout>"#, "layout_constraintTop_toBottomOf")]
#[case::self_reference(r#"<ConstraintLayout><View android:id="@+id/a" app:layout_constraintTop_toBottomOf="@id/a" /></ConstraintLayout>"#, "layout_constraintTop_toBottomOf")]
#[case::gone_target(r#"<ConstraintLayout><View android:id="@+id/a" android:visibility="gone" /><View app:layout_constraintTop_toBottomOf="@id/a" /></ConstraintLayout>"#, "layout_constraintTop_toBottomOf")]
#[case::duplicate_id(r#"<ConstraintLayout><View android:id="@+id/a" /><View android:id="@+id/a" /></ConstraintLayout>"#, "id")]
#[case::parent_id(r#"<ConstraintLayout><View android:id="@+id/parent" /></ConstraintLayout>"#, "id")]
fn constraint_errors(#[case] src: &str, #[case] attribute: &str) {
    let e = compose(&parse_str(src).unwrap()).unwrap_err();
    assert_eq!(e.kind, ViewKind::View);
    assert_eq!(e.attribute, attribute);
}

// ── Leaves ────────────────────────────────────────────────────────────────

#[rstest]
#[case(r#"<Slider android:valueFrom="0" android:valueTo="10" android:value="4" android:stepSize="1" />"#,
       "Slider(value = 4f, onValueChange = {}, valueRange = 0f..10f, steps = 9)")]
#[case(r#"<RangeSlider android:enabled="false" app:values="[0.2, 0.8]" />"#,
       "RangeSlider(value = 0.2f..0.8f, onValueChange = {}, enabled = false)")]
#[case(r#"<Switch android:enabled="false" />"#,
       "Switch(checked = false, onCheckedChange = {}, enabled = false)")]
#[case(r##"<TextView android:text="Hi" android:textColor="?attr/colorPrimary" android:maxLines="2" android:gravity="center" />"##,
       "Text(text = \"Hi\", color = MaterialTheme.colors.primary, textAlign = TextAlign.Center, maxLines = 2)")]
#[case(r#"<EditText android:inputType="number" android:singleLine="true" />"#,
       "TextField(value = \"\", onValueChange = {}, keyboardOptions = KeyboardOptions(keyboardType = KeyboardType.Number), singleLine = true)")]
#[case(r#"<ImageView android:src="@drawable/logo" android:contentDescription="@string/logo" />"#,
       "Image(painter = painterResource(id = R.drawable.logo), contentDescription = stringResource(id = R.string.logo))")]
#[case(r#"<View android:layout_width="24dp" android:layout_height="24dp" android:background="@drawable/dot" />"#,
       "Spacer(modifier = Modifier.size(24.dp).paint(painterResource(id = R.drawable.dot), contentScale = ContentScale.FillBounds))")]
fn leaf_templates(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(out(src), format!("{expected}\n"));
}

#[test]
fn slider_value_outside_range() {
    let e = compose(&parse_str(r#"<Slider android:valueTo="10" android:value="11" />"#).unwrap()).unwrap_err();
    assert_eq!(e.attribute, "value");
    let e = compose(&parse_str(r#"<RangeSlider android:valueTo="10" app:values="[2, 12]" />"#).unwrap()).unwrap_err();
    assert_eq!(e.attribute, "values");
}
